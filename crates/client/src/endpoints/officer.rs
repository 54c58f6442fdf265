use domain::models::{
    CheckInRequest, CheckInResponse, Duty, LocationUpdateRequest, LocationUpdateResponse,
};

use crate::api::{fallback, OfficerApi};
use crate::api_client::ApiClient;
use crate::error::ClientError;
use crate::session::Session;

#[async_trait::async_trait]
impl OfficerApi for ApiClient {
    async fn my_duties(&self, session: &Session) -> Result<Vec<Duty>, ClientError> {
        self.get(
            "my_duties",
            &["duties", "my-duties"],
            Some(session),
            fallback::MY_DUTIES,
        )
        .await
    }

    async fn location_update(
        &self,
        session: &Session,
        duty_id: &str,
        request: &LocationUpdateRequest,
    ) -> Result<LocationUpdateResponse, ClientError> {
        self.post(
            "location_update",
            &["duties", duty_id, "location-update"],
            Some(session),
            request,
            fallback::LOCATION_UPDATE,
        )
        .await
    }

    async fn check_in(
        &self,
        session: &Session,
        duty_id: &str,
        request: &CheckInRequest,
    ) -> Result<CheckInResponse, ClientError> {
        tracing::info!(duty_id, "Checking in");
        self.post(
            "check_in",
            &["duties", duty_id, "checkin"],
            Some(session),
            request,
            fallback::CHECK_IN,
        )
        .await
    }
}
