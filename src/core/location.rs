use crate::core::ports::LocationProvider;
use crate::models::geo_point::GeoPoint;

/// A location reading resolved up front (CLI flags or configuration).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation {
    point: Option<GeoPoint>,
}

impl FixedLocation {
    pub fn new(point: Option<GeoPoint>) -> Self {
        Self { point }
    }

    pub fn unavailable() -> Self {
        Self { point: None }
    }

    /// Explicit reading first, then the configured fallback.
    pub fn resolve(explicit: Option<GeoPoint>, fallback: Option<GeoPoint>) -> Self {
        Self {
            point: explicit.or(fallback),
        }
    }
}

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> Option<GeoPoint> {
        self.point
    }
}
