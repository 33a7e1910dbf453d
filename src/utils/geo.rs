//! Parsing of user supplied coordinates.
//!
//! The geofence engine itself accepts any `f64`; range checks happen here,
//! at the edge where values come from the command line.

use crate::errors::{AppError, AppResult};
use crate::models::geo_point::GeoPoint;

pub fn parse_coordinates(lat: f64, lon: f64) -> AppResult<GeoPoint> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(AppError::InvalidCoordinate(format!(
            "latitude {} is outside [-90, 90]",
            lat
        )));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(AppError::InvalidCoordinate(format!(
            "longitude {} is outside [-180, 180]",
            lon
        )));
    }
    Ok(GeoPoint::new(lat, lon))
}

/// Both flags or neither: a lone `--lat` or `--lon` is an error.
pub fn optional_point(lat: Option<f64>, lon: Option<f64>) -> AppResult<Option<GeoPoint>> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => parse_coordinates(lat, lon).map(Some),
        (None, None) => Ok(None),
        _ => Err(AppError::InvalidCoordinate(
            "--lat and --lon must be given together".into(),
        )),
    }
}
