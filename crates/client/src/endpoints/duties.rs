use domain::models::{CreateDutyRequest, Duty, Officer, VerificationStatus};

use crate::api::{fallback, DutyApi};
use crate::api_client::ApiClient;
use crate::error::ClientError;
use crate::session::Session;

#[async_trait::async_trait]
impl DutyApi for ApiClient {
    async fn list_officers(&self, session: &Session) -> Result<Vec<Officer>, ClientError> {
        self.get(
            "list_officers",
            &["duties", "users", "all"],
            Some(session),
            fallback::OFFICERS,
        )
        .await
    }

    async fn list_duties(&self, session: &Session) -> Result<Vec<Duty>, ClientError> {
        self.get("list_duties", &["duties"], Some(session), fallback::DUTIES)
            .await
    }

    async fn verification_status(
        &self,
        session: &Session,
        officer_id: &str,
    ) -> Result<VerificationStatus, ClientError> {
        self.get(
            "verification_status",
            &["duties", "location-update", officer_id],
            Some(session),
            fallback::VERIFICATION,
        )
        .await
    }

    async fn create_duty(
        &self,
        session: &Session,
        request: &CreateDutyRequest,
    ) -> Result<Duty, ClientError> {
        tracing::info!(
            officer_id = %request.officer_id,
            location = %request.location,
            "Assigning duty"
        );
        self.post(
            "create_duty",
            &["duties"],
            Some(session),
            request,
            fallback::ASSIGN,
        )
        .await
    }
}
