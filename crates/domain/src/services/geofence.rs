//! Geofence math for the officer-side preview.
//!
//! The server decides compliance; this mirrors its haversine check so an
//! officer can see the expected outcome before reporting a position.

use geo::{HaversineDistance, Point};

use crate::models::{Duty, GeoPoint};

/// Outcome of checking a point against a duty's geofence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeofenceCheck {
    pub distance_meters: f64,
    pub radius_meters: f64,
    pub inside: bool,
}

/// Great-circle distance between two points in meters.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    // geo points are (x = longitude, y = latitude)
    let from = Point::new(a.lng, a.lat);
    let to = Point::new(b.lng, b.lat);
    from.haversine_distance(&to)
}

/// Checks whether `position` lies within `duty`'s geofence (boundary
/// inclusive).
pub fn check_position(duty: &Duty, position: GeoPoint) -> GeofenceCheck {
    let center = GeoPoint::new(duty.latitude, duty.longitude);
    let distance = distance_meters(center, position);
    GeofenceCheck {
        distance_meters: distance,
        radius_meters: duty.radius,
        inside: distance <= duty.radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duty_at(lat: f64, lng: f64, radius: f64) -> Duty {
        Duty {
            id: Some("d-1".to_string()),
            officer_id: "1".to_string(),
            assigned_by: None,
            location: "Gate A".to_string(),
            latitude: lat,
            longitude: lng,
            radius,
            start_time: None,
            end_time: None,
            status: Default::default(),
        }
    }

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = GeoPoint::new(15.3, 74.0);
        assert!(distance_meters(p, p) < 1e-6);
    }

    #[test]
    fn test_distance_one_degree_latitude() {
        let d = distance_meters(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        // ~111.2 km on a 6371 km sphere
        assert!((d - 111_195.0).abs() < 200.0, "got {}", d);
    }

    #[test]
    fn test_check_position_inside_and_outside() {
        let duty = duty_at(15.3, 74.0, 100.0);

        let near = check_position(&duty, GeoPoint::new(15.3005, 74.0));
        assert!(near.inside, "{:?}", near);

        let far = check_position(&duty, GeoPoint::new(15.31, 74.0));
        assert!(!far.inside, "{:?}", far);
        assert_eq!(far.radius_meters, 100.0);
    }
}
