//! Plain-text and JSON rendering of console views.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use domain::models::{Duty, MapView, OfficerWithDuty};
use domain::services::{DashboardState, GeofenceCheck};
use shared::jwt::TokenClaims;

use domain::models::instant::format_instant;

/// Renders the dashboard state. The roster is a table; the last column
/// says whether a duty can still be assigned.
pub fn dashboard(state: &DashboardState) -> String {
    match state {
        DashboardState::Loading => "Loading...\n".to_string(),
        DashboardState::Error(message) => format!("Error: {}\n", message),
        DashboardState::Ready(entries) => roster(entries),
    }
}

pub fn roster(entries: &[OfficerWithDuty]) -> String {
    if entries.is_empty() {
        return "No officers found.\n".to_string();
    }

    let mut out = format!(
        "{:<26} {:<12} {:<24} {:<22} {}\n",
        "ID", "EMPID", "DUTY", "VERIFICATION", "ASSIGN"
    );
    for entry in entries {
        let duty = entry
            .assigned_duty
            .as_ref()
            .map(|d| d.location.as_str())
            .unwrap_or("-");
        let verification = match (&entry.assigned_duty, &entry.verification) {
            (None, _) => "-",
            (Some(_), None) => "unknown",
            (Some(_), Some(status)) => status.summary(),
        };
        let assign = if entry.can_assign() {
            "available"
        } else {
            "disabled"
        };
        let _ = writeln!(
            out,
            "{:<26} {:<12} {:<24} {:<22} {}",
            entry.id(),
            entry.empid(),
            duty,
            verification,
            assign
        );
    }
    out
}

/// Text rendering of the live map: center, zoom and one line per marker
/// with its verification status.
pub fn map_table(view: &MapView) -> String {
    let mut out = format!("Center: {} (zoom {})\n", view.center, view.zoom);
    if view.markers.is_empty() {
        out.push_str("No duties assigned.\n");
        return out;
    }
    for marker in &view.markers {
        let _ = writeln!(
            out,
            "{} {:<12} {:<24} {} r={}m {}",
            marker.color.hex(),
            marker.empid,
            marker.location,
            marker.position,
            marker.radius,
            marker
                .verification
                .as_ref()
                .map(|status| status.summary())
                .unwrap_or("unknown")
        );
    }
    out
}

pub fn map_geojson(view: &MapView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&view.to_geojson())
}

pub fn duties(duties: &[Duty]) -> String {
    if duties.is_empty() {
        return "No duties assigned.\n".to_string();
    }

    let mut out = String::new();
    for duty in duties {
        let window = match (&duty.start_time, &duty.end_time) {
            (Some(start), Some(end)) => format!("{} - {}", format_instant(start), format_instant(end)),
            _ => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "{} {:<24} {:.6}, {:.6} r={}m {} {}",
            duty.id.as_deref().unwrap_or("-"),
            duty.location,
            duty.latitude,
            duty.longitude,
            duty.radius,
            duty.status,
            window
        );
    }
    out
}

pub fn geofence(duty: &Duty, check: &GeofenceCheck) -> String {
    format!(
        "{} is {:.1} m from {} (radius {} m): {}\n",
        if check.inside { "Inside" } else { "Outside" },
        check.distance_meters,
        duty.location,
        check.radius_meters,
        if check.inside {
            "a location update should be accepted"
        } else {
            "move closer before checking in"
        }
    )
}

/// Token holder and expiry; `now` decides whether the token has lapsed.
pub fn claims(claims: &TokenClaims, now: DateTime<Utc>) -> String {
    let mut out = format!(
        "Signed in as: {}\n",
        claims.subject().unwrap_or("unknown")
    );
    if let Some(role) = &claims.role {
        let _ = writeln!(out, "Role: {}", role);
    }
    match claims.expires_at() {
        Some(exp) if claims.is_expired_at(now) => {
            let _ = writeln!(out, "Expired: {} (log in again)", format_instant(&exp));
        }
        Some(exp) => {
            let _ = writeln!(out, "Expires: {}", format_instant(&exp));
        }
        None => out.push_str("Expires: never\n"),
    }
    out
}
