//! Duty (geofenced assignment) domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default geofence radius in meters.
pub const DEFAULT_RADIUS_METERS: f64 = 100.0;

/// Lifecycle of a duty as tracked by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DutyStatus {
    #[default]
    Pending,
    Completed,
    Missed,
}

impl DutyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::Pending => "PENDING",
            DutyStatus::Completed => "COMPLETED",
            DutyStatus::Missed => "MISSED",
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A duty binding one officer to a location, radius and time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Duty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub officer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_by: Option<String>,
    /// Free-text label shown in the popup, e.g. "Gate A".
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::models::instant::option"
    )]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::models::instant::option"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: DutyStatus,
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS_METERS
}

/// Request payload for `POST /duties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDutyRequest {
    #[validate(length(min = 1, message = "Officer id is required"))]
    pub officer_id: String,

    #[validate(
        length(min = 1, max = 200, message = "Location must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub location: String,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    #[validate(custom(function = "shared::validation::validate_radius"))]
    pub radius: f64,

    #[serde(with = "crate::models::instant")]
    pub start_time: DateTime<Utc>,

    #[serde(with = "crate::models::instant")]
    pub end_time: DateTime<Utc>,
}
