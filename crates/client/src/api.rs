//! Traits over the API surface.
//!
//! The console depends on these rather than on [`crate::ApiClient`] so the
//! aggregator and the flows can be driven by [`crate::mock::MockDutyApi`] in
//! tests.

use domain::models::{
    AccountKind, CheckInRequest, CheckInResponse, CreateDutyRequest, Credentials, Duty,
    LocationUpdateRequest, LocationUpdateResponse, Officer, TokenResponse, VerificationStatus,
};

use crate::error::ClientError;
use crate::session::Session;

/// Fallback messages used when the server gives no detail.
pub mod fallback {
    pub const LOGIN: &str = "Login failed";
    pub const REGISTER: &str = "Registration failed";
    pub const OFFICERS: &str = "Failed to fetch officers.";
    pub const DUTIES: &str = "Failed to fetch duties.";
    pub const VERIFICATION: &str = "Failed to fetch verification status.";
    pub const ASSIGN: &str = "Failed to assign duty.";
    pub const MY_DUTIES: &str = "Failed to fetch your duties.";
    pub const LOCATION_UPDATE: &str = "Failed to send location update.";
    pub const CHECK_IN: &str = "Check-in failed.";
}

/// Account endpoints (no session required).
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /users/admin/login` or `POST /users/login`.
    async fn login(
        &self,
        kind: AccountKind,
        credentials: &Credentials,
    ) -> Result<TokenResponse, ClientError>;

    /// `POST /users/admin/register`. Any JSON body on success is accepted.
    async fn register(&self, credentials: &Credentials) -> Result<(), ClientError>;
}

/// Admin dashboard endpoints.
#[async_trait::async_trait]
pub trait DutyApi: Send + Sync {
    /// `GET /duties/users/all`
    async fn list_officers(&self, session: &Session) -> Result<Vec<Officer>, ClientError>;

    /// `GET /duties`
    async fn list_duties(&self, session: &Session) -> Result<Vec<Duty>, ClientError>;

    /// `GET /duties/location-update/{officerId}`
    async fn verification_status(
        &self,
        session: &Session,
        officer_id: &str,
    ) -> Result<VerificationStatus, ClientError>;

    /// `POST /duties`
    async fn create_duty(
        &self,
        session: &Session,
        request: &CreateDutyRequest,
    ) -> Result<Duty, ClientError>;
}

/// Officer (mobile) endpoints.
#[async_trait::async_trait]
pub trait OfficerApi: Send + Sync {
    /// `GET /duties/my-duties`
    async fn my_duties(&self, session: &Session) -> Result<Vec<Duty>, ClientError>;

    /// `POST /duties/{dutyId}/location-update`
    async fn location_update(
        &self,
        session: &Session,
        duty_id: &str,
        request: &LocationUpdateRequest,
    ) -> Result<LocationUpdateResponse, ClientError>;

    /// `POST /duties/{dutyId}/checkin`
    async fn check_in(
        &self,
        session: &Session,
        duty_id: &str,
        request: &CheckInRequest,
    ) -> Result<CheckInResponse, ClientError>;
}
