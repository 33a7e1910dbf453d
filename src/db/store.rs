//! Local SQLite implementation of the attendance collaborators.

use crate::core::ports::{AttendanceHistoryStore, GeofenceDirectory};
use crate::db::initialize::open_initialized;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{
    geo_point::GeoPoint, geofence::GeofenceRegion, punch::NewPunch, punch::PunchRecord,
    work_mode::WorkMode,
};
use rusqlite::Connection;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: open_initialized(path)?,
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        crate::db::initialize::init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn add_geofence(
        &self,
        name: &str,
        center: GeoPoint,
        radius_meters: f64,
    ) -> AppResult<GeofenceRegion> {
        queries::insert_geofence(self.conn(), name, center, radius_meters)
    }

    pub fn delete_geofence(&self, id: i64) -> AppResult<()> {
        queries::delete_geofence(self.conn(), id)
    }

    /// Stored mode for `user_id`, or `fallback` if the user has none yet.
    pub fn work_mode(&self, user_id: &str, fallback: WorkMode) -> AppResult<WorkMode> {
        Ok(queries::load_work_mode(self.conn(), user_id)?.unwrap_or(fallback))
    }

    pub fn set_work_mode(&self, user_id: &str, mode: WorkMode) -> AppResult<()> {
        queries::save_work_mode(self.conn(), user_id, mode)
    }
}

impl GeofenceDirectory for SqliteStore {
    fn list_all(&self) -> AppResult<Vec<GeofenceRegion>> {
        queries::load_geofences(self.conn())
    }
}

impl AttendanceHistoryStore for SqliteStore {
    fn history(&self, user_id: &str) -> AppResult<Vec<PunchRecord>> {
        queries::load_punches_for_user(self.conn(), user_id)
    }

    fn record_punch(&self, punch: NewPunch) -> AppResult<PunchRecord> {
        queries::insert_punch(self.conn(), &punch)
    }
}
