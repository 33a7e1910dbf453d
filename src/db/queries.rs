use crate::errors::{AppError, AppResult};
use crate::models::{
    geo_point::GeoPoint, geofence::GeofenceRegion, punch::NewPunch, punch::PunchRecord,
    punch_type::PunchType, work_mode::WorkMode,
};
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

// ---------------------------
// Punches
// ---------------------------

pub fn map_punch_row(row: &Row) -> Result<PunchRecord> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = DateTime::parse_from_rfc3339(&ts_str)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(0, AppError::InvalidTimestamp(ts_str.clone())))?;

    let kind_str: String = row.get("kind")?;
    let kind = PunchType::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidPunchType(kind_str.clone())))?;

    Ok(PunchRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        timestamp,
        location: GeoPoint::new(row.get("latitude")?, row.get("longitude")?),
        project_id: row.get("project_id")?,
        task_id: row.get("task_id")?,
    })
}

pub fn insert_punch(conn: &Connection, p: &NewPunch) -> AppResult<PunchRecord> {
    conn.execute(
        "INSERT INTO punches (user_id, kind, timestamp, latitude, longitude, project_id, task_id, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 'cli', ?8)",
        params![
            p.user_id,
            p.kind.to_db_str(),
            p.timestamp.to_rfc3339(),
            p.location.latitude,
            p.location.longitude,
            p.project_id,
            p.task_id,
            Local::now().to_rfc3339(),
        ],
    )?;

    Ok(PunchRecord {
        id: conn.last_insert_rowid(),
        user_id: p.user_id.clone(),
        kind: p.kind,
        timestamp: p.timestamp,
        location: p.location,
        project_id: p.project_id.clone(),
        task_id: p.task_id.clone(),
    })
}

pub fn load_punches_for_user(conn: &Connection, user_id: &str) -> AppResult<Vec<PunchRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM punches
         WHERE user_id = ?1
         ORDER BY timestamp ASC, id ASC",
    )?;

    let rows = stmt.query_map([user_id], map_punch_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Geofences
// ---------------------------

fn map_geofence_row(row: &Row) -> Result<GeofenceRegion> {
    Ok(GeofenceRegion {
        id: row.get("id")?,
        name: row.get("name")?,
        center: GeoPoint::new(row.get("latitude")?, row.get("longitude")?),
        radius_meters: row.get("radius_meters")?,
    })
}

pub fn load_geofences(conn: &Connection) -> AppResult<Vec<GeofenceRegion>> {
    let mut stmt = conn.prepare("SELECT * FROM geofences ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_geofence_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_geofence_by_name(conn: &Connection, name: &str) -> AppResult<Option<GeofenceRegion>> {
    Ok(conn
        .query_row(
            "SELECT * FROM geofences WHERE name = ?1",
            [name],
            map_geofence_row,
        )
        .optional()?)
}

pub fn insert_geofence(
    conn: &Connection,
    name: &str,
    center: GeoPoint,
    radius_meters: f64,
) -> AppResult<GeofenceRegion> {
    if find_geofence_by_name(conn, name)?.is_some() {
        return Err(AppError::DuplicateGeofence(name.to_string()));
    }
    if !(radius_meters.is_finite() && radius_meters > 0.0) {
        return Err(AppError::InvalidRadius(radius_meters.to_string()));
    }

    conn.execute(
        "INSERT INTO geofences (name, latitude, longitude, radius_meters, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            name,
            center.latitude,
            center.longitude,
            radius_meters,
            Local::now().to_rfc3339(),
        ],
    )?;

    Ok(GeofenceRegion::new(
        conn.last_insert_rowid(),
        name,
        center,
        radius_meters,
    ))
}

/// Delete a geofence by id; errors if nothing was deleted.
pub fn delete_geofence(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM geofences WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::UnknownGeofence(id.to_string()));
    }
    Ok(())
}

// ---------------------------
// Users
// ---------------------------

/// Stored work mode, or `None` for a user never seen before.
pub fn load_work_mode(conn: &Connection, user_id: &str) -> AppResult<Option<WorkMode>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT work_mode FROM users WHERE id = ?1",
            [user_id],
            |row| row.get(0),
        )
        .optional()?;

    match raw {
        None => Ok(None),
        Some(s) => WorkMode::from_db_str(&s)
            .map(Some)
            .ok_or(AppError::InvalidWorkMode(s)),
    }
}

pub fn save_work_mode(conn: &Connection, user_id: &str, mode: WorkMode) -> AppResult<()> {
    conn.execute(
        "INSERT INTO users (id, work_mode, created_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET work_mode = excluded.work_mode",
        params![user_id, mode.to_db_str(), Local::now().to_rfc3339()],
    )?;
    Ok(())
}
