//! Geofence membership: great-circle distance and region lookups.
//!
//! Pure functions over plain data. Coordinates are not validated; a NaN or
//! infinite input gives a NaN distance, and every `<=` comparison against a
//! NaN is false, so malformed data simply never matches.

use crate::models::{geo_point::GeoPoint, geofence::GeofenceRegion};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance in meters between two points given in degrees.
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let h = (d_phi / 2.0).sin() * (d_phi / 2.0).sin()
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin() * (d_lambda / 2.0).sin();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Distance from `point` to the center of `region`.
pub fn distance_to(point: &GeoPoint, region: &GeofenceRegion) -> f64 {
    haversine_distance(point, &region.center)
}

/// True iff `point` lies on or inside the region's circle.
pub fn is_within(point: &GeoPoint, region: &GeofenceRegion) -> bool {
    distance_to(point, region) <= region.radius_meters
}

/// True iff `point` is inside at least one region. Stops at the first hit.
pub fn any_within(point: &GeoPoint, regions: &[GeofenceRegion]) -> bool {
    regions.iter().any(|r| is_within(point, r))
}

/// Region whose center is closest to `point`, with its distance.
///
/// Ties keep the earliest region in input order. Regions at a NaN distance
/// are never selected over a comparable one, but if every distance is NaN
/// the first region is returned.
pub fn nearest_region<'a>(
    point: &GeoPoint,
    regions: &'a [GeofenceRegion],
) -> Option<(&'a GeofenceRegion, f64)> {
    let mut best: Option<(&GeofenceRegion, f64)> = None;

    for region in regions {
        let d = distance_to(point, region);
        match best {
            None => best = Some((region, d)),
            Some((_, best_d)) if d < best_d || (best_d.is_nan() && !d.is_nan()) => {
                best = Some((region, d))
            }
            _ => {}
        }
    }

    best
}

/// Every region paired with its distance and membership, in input order.
/// Used by `geofence check` to explain an admission decision.
pub fn survey<'a>(
    point: &GeoPoint,
    regions: &'a [GeofenceRegion],
) -> Vec<(&'a GeofenceRegion, f64, bool)> {
    regions
        .iter()
        .map(|r| {
            let d = distance_to(point, r);
            (r, d, d <= r.radius_meters)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office(radius: f64) -> GeofenceRegion {
        GeofenceRegion::new(1, "Delhi HQ", GeoPoint::new(28.7041, 77.1025), radius)
    }

    #[test]
    fn identical_points_are_zero_apart() {
        let p = GeoPoint::new(28.7041, 77.1025);
        assert_eq!(haversine_distance(&p, &p), 0.0);
        assert!(is_within(&p, &office(200.0)));
    }

    #[test]
    fn thousandth_of_a_degree_north_is_about_111_meters() {
        let p = GeoPoint::new(28.7051, 77.1025);
        let d = distance_to(&p, &office(200.0));
        assert!((d - 111.19).abs() < 0.5, "distance was {d}");
        assert!(is_within(&p, &office(200.0)));
        assert!(!is_within(&p, &office(100.0)));
    }

    #[test]
    fn antipodal_points_are_half_the_circumference_apart() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let d = haversine_distance(&a, &b);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1.0);
    }

    #[test]
    fn nan_coordinates_never_match() {
        let p = GeoPoint::new(f64::NAN, 77.1025);
        assert!(haversine_distance(&p, &office(1.0).center).is_nan());
        assert!(!is_within(&p, &office(f64::INFINITY)));
        assert!(!any_within(&p, &[office(500.0)]));
    }

    #[test]
    fn non_positive_radius_does_not_panic() {
        let p = GeoPoint::new(28.7051, 77.1025);
        assert!(!is_within(&p, &office(0.0)));
        assert!(!is_within(&p, &office(-10.0)));
    }

    #[test]
    fn nearest_region_breaks_ties_by_input_order() {
        let c = GeoPoint::new(10.0, 10.0);
        let first = GeofenceRegion::new(1, "first", c, 50.0);
        let second = GeofenceRegion::new(2, "second", c, 50.0);
        let regions = vec![first, second];

        let (r, d) = nearest_region(&c, &regions).unwrap();
        assert_eq!(r.id, 1);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn nearest_region_skips_a_leading_nan_distance() {
        let p = GeoPoint::new(28.7051, 77.1025);
        let broken = GeofenceRegion::new(7, "broken", GeoPoint::new(f64::NAN, 0.0), 100.0);
        let regions = vec![broken.clone(), office(200.0)];

        let (r, d) = nearest_region(&p, &regions).unwrap();
        assert_eq!(r.name, "Delhi HQ");
        assert!(d.is_finite() && d < 200.0);

        let all_nan = vec![broken];
        let (r, d) = nearest_region(&p, &all_nan).unwrap();
        assert_eq!(r.id, 7);
        assert!(d.is_nan());
    }

    #[test]
    fn nearest_region_of_empty_list_is_none() {
        assert!(nearest_region(&GeoPoint::new(0.0, 0.0), &[]).is_none());
    }

    #[test]
    fn survey_reports_each_region() {
        let p = GeoPoint::new(28.7051, 77.1025);
        let far = GeofenceRegion::new(2, "Mumbai", GeoPoint::new(19.0760, 72.8777), 500.0);
        let regions = vec![far, office(200.0)];

        let rows = survey(&p, &regions);
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].2);
        assert!(rows[1].2);
    }
}
