//! Collaborator contracts the attendance core is driven through.
//!
//! The core itself never performs I/O; these traits are implemented by the
//! storage layer (`db::store::SqliteStore`) and by `core::location`.

use crate::errors::AppResult;
use crate::models::{
    geo_point::GeoPoint, geofence::GeofenceRegion, punch::NewPunch, punch::PunchRecord,
};

/// Source of the device's current position.
pub trait LocationProvider {
    /// `None` when no reading is available.
    fn current_location(&self) -> Option<GeoPoint>;
}

/// Read-only view of the configured geofences.
pub trait GeofenceDirectory {
    fn list_all(&self) -> AppResult<Vec<GeofenceRegion>>;
}

/// Append-only punch log.
pub trait AttendanceHistoryStore {
    fn history(&self, user_id: &str) -> AppResult<Vec<PunchRecord>>;

    /// Persist a punch that already passed the local checks.
    fn record_punch(&self, punch: NewPunch) -> AppResult<PunchRecord>;
}
