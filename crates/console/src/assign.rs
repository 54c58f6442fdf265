//! Duty assignment submission.

use std::future::Future;

use client::{DutyApi, Session};
use domain::models::Duty;
use domain::services::DutyForm;

use crate::error::ConsoleError;

/// Validates the form, posts the duty and then awaits `on_success`.
///
/// Nothing is sent when the form is invalid, and `on_success` only runs
/// after the server accepted the duty.
pub async fn submit_duty<A, F, Fut>(
    api: &A,
    session: &Session,
    officer_id: &str,
    form: &DutyForm,
    on_success: F,
) -> Result<Duty, ConsoleError>
where
    A: DutyApi + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let request = form.to_request(officer_id)?;
    let duty = api.create_duty(session, &request).await?;

    tracing::info!(
        officer_id = %duty.officer_id,
        location = %duty.location,
        "Duty assigned"
    );
    on_success().await;
    Ok(duty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::MockDutyApi;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn form() -> DutyForm {
        DutyForm {
            location: "Gate A".to_string(),
            latitude: "15.3".to_string(),
            longitude: "74.0".to_string(),
            radius: "100".to_string(),
            date: "2024-05-01".to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_posts_utc_instants() {
        let api = MockDutyApi::new();
        let refreshed = AtomicBool::new(false);

        let duty = submit_duty(&api, &Session::new("t"), "1", &form(), || async {
            refreshed.store(true, Ordering::SeqCst);
        })
        .await
        .unwrap();

        assert!(refreshed.load(Ordering::SeqCst));
        let json = serde_json::to_value(&duty).unwrap();
        assert_eq!(json["startTime"], "2024-05-01T09:00:00.000Z");
        assert_eq!(json["endTime"], "2024-05-01T17:00:00.000Z");
    }

    #[tokio::test]
    async fn test_failure_skips_callback() {
        let api = MockDutyApi::failing();
        let refreshed = AtomicBool::new(false);

        let err = submit_duty(&api, &Session::new("t"), "1", &form(), || async {
            refreshed.store(true, Ordering::SeqCst);
        })
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "Failed to assign duty.");
        assert!(!refreshed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_invalid_radius_is_not_sent() {
        let api = MockDutyApi::new();
        let mut bad = form();
        bad.radius = "-5".to_string();

        let err = submit_duty(&api, &Session::new("t"), "1", &bad, || async {})
            .await
            .unwrap_err();
        assert!(matches!(err, ConsoleError::Form(_)));
        assert!(api.duties().is_empty());
    }
}
