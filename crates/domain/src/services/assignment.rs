//! Duty-assignment form.
//!
//! Holds the raw field values as the operator typed them and turns them into
//! a [`CreateDutyRequest`].
//!
//! Start and end instants are built by appending `:00Z` to `{date}T{time}`,
//! so the wall-clock time the operator enters is read as UTC. Whether the
//! entry should be interpreted in the operator's zone instead is an open
//! question; the behavior is kept as-is until that is settled.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{CreateDutyRequest, GeoPoint, DEFAULT_RADIUS_METERS};

/// Errors raised while turning the form into a request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Date must be YYYY-MM-DD, got '{0}'")]
    InvalidDate(String),

    #[error("{field} must be HH:MM, got '{value}'")]
    InvalidTime { field: &'static str, value: String },

    #[error("{0}")]
    Validation(String),
}

impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();
        messages.sort();

        let message = if messages.len() == 1 {
            messages.remove(0)
        } else {
            messages.join("; ")
        };
        FormError::Validation(message)
    }
}

/// Builds a UTC instant from a `YYYY-MM-DD` date and an `HH:MM` time.
pub fn compose_instant(
    date: &str,
    time: &str,
    field: &'static str,
) -> Result<DateTime<Utc>, FormError> {
    let date = date.trim();
    let time = time.trim();
    if date.is_empty() {
        return Err(FormError::Missing("Date"));
    }
    if time.is_empty() {
        return Err(FormError::Missing(field));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate(date.to_string()))?;

    DateTime::parse_from_rfc3339(&format!("{}T{}:00Z", date, time))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| FormError::InvalidTime {
            field,
            value: time.to_string(),
        })
}

fn parse_number(raw: &str, field: &'static str) -> Result<f64, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::Missing(field));
    }
    raw.parse::<f64>().map_err(|_| FormError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Raw field values of the assign-duty modal.
#[derive(Debug, Clone, PartialEq)]
pub struct DutyForm {
    pub location: String,
    pub latitude: String,
    pub longitude: String,
    pub radius: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl Default for DutyForm {
    fn default() -> Self {
        Self::with_radius(DEFAULT_RADIUS_METERS)
    }
}

impl DutyForm {
    /// Empty form with the radius pre-filled.
    pub fn with_radius(radius: f64) -> Self {
        Self {
            location: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            radius: radius.to_string(),
            date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
        }
    }

    /// Copies a picked point into the coordinate fields.
    pub fn set_point(&mut self, point: GeoPoint) {
        self.latitude = point.lat.to_string();
        self.longitude = point.lng.to_string();
    }

    /// Assembles and validates the request for `officer_id`.
    pub fn to_request(&self, officer_id: &str) -> Result<CreateDutyRequest, FormError> {
        if self.location.trim().is_empty() {
            return Err(FormError::Missing("Location"));
        }
        let latitude = parse_number(&self.latitude, "Latitude")?;
        let longitude = parse_number(&self.longitude, "Longitude")?;
        let radius = parse_number(&self.radius, "Radius")?;
        let start_time = compose_instant(&self.date, &self.start_time, "Start time")?;
        let end_time = compose_instant(&self.date, &self.end_time, "End time")?;

        let request = CreateDutyRequest {
            officer_id: officer_id.to_string(),
            location: self.location.clone(),
            latitude,
            longitude,
            radius,
            start_time,
            end_time,
        };
        request.validate()?;
        Ok(request)
    }
}
