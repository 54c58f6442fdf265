//! Officer-side duty reporting payloads (location updates and check-ins).

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for `POST /duties/{id}/location-update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LocationUpdateRequest {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,
}

/// Response of a location update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationUpdateResponse {
    pub status: String,
    pub in_radius: bool,
}

/// Request payload for `POST /duties/{id}/checkin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    #[validate(length(min = 1, message = "Selfie URL is required"))]
    pub selfie_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Response of a check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInResponse {
    pub status: String,
    pub location_verified: bool,
    pub face_verified: bool,
}
