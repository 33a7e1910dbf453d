use super::geo_point::GeoPoint;
use serde::Serialize;

/// A named circular area used to gate ONSITE attendance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeofenceRegion {
    pub id: i64,                // ⇔ geofences.id
    pub name: String,           // ⇔ geofences.name (UNIQUE)
    pub center: GeoPoint,       // ⇔ geofences.latitude / geofences.longitude
    pub radius_meters: f64,     // ⇔ geofences.radius_meters (> 0)
}

impl GeofenceRegion {
    pub fn new(id: i64, name: impl Into<String>, center: GeoPoint, radius_meters: f64) -> Self {
        Self {
            id,
            name: name.into(),
            center,
            radius_meters,
        }
    }
}
