//! Common validation utilities.

use validator::ValidationError;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates that a geofence radius is a positive number of meters.
pub fn validate_radius(radius: f64) -> Result<(), ValidationError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("radius_range");
        err.message = Some("Radius must be a positive number of meters".into());
        Err(err)
    }
}

/// Validates that a free-text field is not blank.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Latitude tests
    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(-90.1).is_err());
    }

    #[test]
    fn test_validate_latitude_decimals() {
        assert!(validate_latitude(45.123456).is_ok());
        assert!(validate_latitude(-45.123456).is_ok());
        assert!(validate_latitude(89.999999).is_ok());
    }

    #[test]
    fn test_validate_latitude_error_message() {
        let err = validate_latitude(100.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Latitude must be between -90 and 90"
        );
    }

    // Longitude tests
    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(0.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.1).is_err());
        assert!(validate_longitude(-180.1).is_err());
    }

    #[test]
    fn test_validate_longitude_decimals() {
        assert!(validate_longitude(122.123456).is_ok());
        assert!(validate_longitude(-122.123456).is_ok());
        assert!(validate_longitude(179.999999).is_ok());
    }

    #[test]
    fn test_validate_longitude_error_message() {
        let err = validate_longitude(200.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Longitude must be between -180 and 180"
        );
    }

    // Radius tests
    #[test]
    fn test_validate_radius() {
        assert!(validate_radius(100.0).is_ok());
        assert!(validate_radius(0.5).is_ok());
        assert!(validate_radius(0.0).is_err());
        assert!(validate_radius(-10.0).is_err());
    }

    #[test]
    fn test_validate_radius_rejects_non_finite() {
        assert!(validate_radius(f64::NAN).is_err());
        assert!(validate_radius(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_radius_error_message() {
        let err = validate_radius(-1.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Radius must be a positive number of meters"
        );
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Gate A").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }
}
