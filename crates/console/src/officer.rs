//! Officer-side operations: own duties, location updates and check-ins.

use client::{OfficerApi, Session};
use domain::models::{
    CheckInRequest, CheckInResponse, Duty, GeoPoint, LocationUpdateRequest, LocationUpdateResponse,
};
use domain::services::{check_position, GeofenceCheck};
use validator::Validate;

use crate::error::ConsoleError;

pub async fn my_duties<A: OfficerApi + ?Sized>(
    api: &A,
    session: &Session,
) -> Result<Vec<Duty>, ConsoleError> {
    Ok(api.my_duties(session).await?)
}

/// Reports the officer's position for a duty.
pub async fn send_location<A: OfficerApi + ?Sized>(
    api: &A,
    session: &Session,
    duty_id: &str,
    position: GeoPoint,
) -> Result<LocationUpdateResponse, ConsoleError> {
    let request = LocationUpdateRequest {
        latitude: position.lat,
        longitude: position.lng,
    };
    request.validate()?;

    let response = api.location_update(session, duty_id, &request).await?;
    tracing::info!(duty_id, in_radius = response.in_radius, "Location update sent");
    Ok(response)
}

pub async fn check_in<A: OfficerApi + ?Sized>(
    api: &A,
    session: &Session,
    duty_id: &str,
    request: &CheckInRequest,
) -> Result<CheckInResponse, ConsoleError> {
    request.validate()?;

    let response = api.check_in(session, duty_id, request).await?;
    tracing::info!(
        duty_id,
        location_verified = response.location_verified,
        face_verified = response.face_verified,
        "Check-in sent"
    );
    Ok(response)
}

/// Finds a duty by id in the officer's list.
pub fn find_duty<'a>(duties: &'a [Duty], duty_id: &str) -> Result<&'a Duty, ConsoleError> {
    duties
        .iter()
        .find(|d| d.id.as_deref() == Some(duty_id))
        .ok_or_else(|| ConsoleError::UnknownDuty(duty_id.to_string()))
}

/// Checks a position against one of the officer's duties without
/// reporting it.
pub async fn preview_geofence<A: OfficerApi + ?Sized>(
    api: &A,
    session: &Session,
    duty_id: &str,
    position: GeoPoint,
) -> Result<(Duty, GeofenceCheck), ConsoleError> {
    let duties = api.my_duties(session).await?;
    let duty = find_duty(&duties, duty_id)?.clone();
    let check = check_position(&duty, position);
    tracing::debug!(
        duty_id,
        distance_meters = check.distance_meters,
        inside = check.inside,
        "Geofence preview"
    );
    Ok((duty, check))
}
