//! In-memory API for development and testing.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use domain::models::{
    AccountKind, CheckInRequest, CheckInResponse, CreateDutyRequest, Credentials, Duty,
    DutyStatus, GeoPoint, LocationUpdateRequest, LocationUpdateResponse, Officer,
    TokenResponse, VerificationStatus,
};
use domain::services::check_position;

use crate::api::{fallback, AuthApi, DutyApi, OfficerApi};
use crate::error::ClientError;
use crate::session::Session;

/// Mock duty API backed by in-memory lists.
///
/// Officers and duties are returned in insertion order. Created duties are
/// appended, so a refresh after an assignment sees them.
#[derive(Debug, Default)]
pub struct MockDutyApi {
    officers: Mutex<Vec<Officer>>,
    duties: Mutex<Vec<Duty>>,
    verifications: HashMap<String, VerificationStatus>,
    failing_verifications: HashSet<String>,
    accounts: Mutex<HashMap<String, (String, AccountKind)>>,
    /// Whether list and create calls fail.
    pub simulate_failure: bool,
    verification_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl MockDutyApi {
    /// Create an empty mock API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock API whose list and create calls fail.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    pub fn with_officer(self, officer: Officer) -> Self {
        self.lock_officers().push(officer);
        self
    }

    pub fn with_duty(self, duty: Duty) -> Self {
        self.lock_duties().push(duty);
        self
    }

    pub fn with_verification(mut self, status: VerificationStatus) -> Self {
        self.verifications.insert(status.officer_id.clone(), status);
        self
    }

    /// Makes the verification lookup for `officer_id` fail.
    pub fn with_failing_verification(mut self, officer_id: impl Into<String>) -> Self {
        self.failing_verifications.insert(officer_id.into());
        self
    }

    pub fn with_account(self, kind: AccountKind, credentials: &Credentials) -> Self {
        self.lock_accounts().insert(
            credentials.empid.clone(),
            (credentials.password.clone(), kind),
        );
        self
    }

    /// Number of verification lookups served so far.
    pub fn verification_calls(&self) -> usize {
        self.verification_calls.load(Ordering::SeqCst)
    }

    /// Number of officer list calls served so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Duties currently held, including created ones.
    pub fn duties(&self) -> Vec<Duty> {
        self.lock_duties().clone()
    }

    fn lock_officers(&self) -> std::sync::MutexGuard<'_, Vec<Officer>> {
        self.officers.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_duties(&self) -> std::sync::MutexGuard<'_, Vec<Duty>> {
        self.duties.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_accounts(&self) -> std::sync::MutexGuard<'_, HashMap<String, (String, AccountKind)>> {
        self.accounts.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn simulated(message: &str) -> ClientError {
        tracing::warn!(message, "Mock duty API simulating failure");
        ClientError::Server {
            status: 500,
            message: message.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl DutyApi for MockDutyApi {
    async fn list_officers(&self, _session: &Session) -> Result<Vec<Officer>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.simulate_failure {
            return Err(Self::simulated(fallback::OFFICERS));
        }
        Ok(self.lock_officers().clone())
    }

    async fn list_duties(&self, _session: &Session) -> Result<Vec<Duty>, ClientError> {
        if self.simulate_failure {
            return Err(Self::simulated(fallback::DUTIES));
        }
        Ok(self.duties())
    }

    async fn verification_status(
        &self,
        _session: &Session,
        officer_id: &str,
    ) -> Result<VerificationStatus, ClientError> {
        self.verification_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_verifications.contains(officer_id) {
            return Err(Self::simulated(fallback::VERIFICATION));
        }
        Ok(self
            .verifications
            .get(officer_id)
            .cloned()
            .unwrap_or_else(|| VerificationStatus {
                officer_id: officer_id.to_string(),
                face_verified: false,
                location_verified: false,
            }))
    }

    async fn create_duty(
        &self,
        _session: &Session,
        request: &CreateDutyRequest,
    ) -> Result<Duty, ClientError> {
        if self.simulate_failure {
            return Err(Self::simulated(fallback::ASSIGN));
        }

        let mut duties = self.lock_duties();
        let duty = Duty {
            id: Some(format!("duty-{}", duties.len() + 1)),
            officer_id: request.officer_id.clone(),
            assigned_by: Some("mock-admin".to_string()),
            location: request.location.clone(),
            latitude: request.latitude,
            longitude: request.longitude,
            radius: request.radius,
            start_time: Some(request.start_time),
            end_time: Some(request.end_time),
            status: DutyStatus::Pending,
        };
        tracing::info!(
            officer_id = %duty.officer_id,
            location = %duty.location,
            "Mock: created duty"
        );
        duties.push(duty.clone());
        Ok(duty)
    }
}

#[async_trait::async_trait]
impl AuthApi for MockDutyApi {
    async fn login(
        &self,
        kind: AccountKind,
        credentials: &Credentials,
    ) -> Result<TokenResponse, ClientError> {
        let accounts = self.lock_accounts();
        match accounts.get(&credentials.empid) {
            Some((password, account_kind))
                if *password == credentials.password && *account_kind == kind =>
            {
                Ok(TokenResponse {
                    access_token: format!("mock-token-{}", credentials.empid),
                    token_type: Some("bearer".to_string()),
                })
            }
            _ => Err(ClientError::Server {
                status: 401,
                message: "Invalid credentials".to_string(),
            }),
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let mut accounts = self.lock_accounts();
        if accounts.contains_key(&credentials.empid) {
            return Err(ClientError::Server {
                status: 400,
                message: "User with this empid already exists".to_string(),
            });
        }
        accounts.insert(
            credentials.empid.clone(),
            (credentials.password.clone(), AccountKind::Admin),
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl OfficerApi for MockDutyApi {
    async fn my_duties(&self, _session: &Session) -> Result<Vec<Duty>, ClientError> {
        if self.simulate_failure {
            return Err(Self::simulated(fallback::MY_DUTIES));
        }
        Ok(self.duties())
    }

    async fn location_update(
        &self,
        _session: &Session,
        duty_id: &str,
        request: &LocationUpdateRequest,
    ) -> Result<LocationUpdateResponse, ClientError> {
        let check = self.check(duty_id, GeoPoint::new(request.latitude, request.longitude))?;
        Ok(LocationUpdateResponse {
            status: "ok".to_string(),
            in_radius: check,
        })
    }

    async fn check_in(
        &self,
        _session: &Session,
        duty_id: &str,
        request: &CheckInRequest,
    ) -> Result<CheckInResponse, ClientError> {
        let inside = self.check(duty_id, GeoPoint::new(request.latitude, request.longitude))?;
        Ok(CheckInResponse {
            status: if inside { "checked_in" } else { "rejected" }.to_string(),
            location_verified: inside,
            face_verified: !request.selfie_url.is_empty(),
        })
    }
}

impl MockDutyApi {
    /// Whether `position` lies inside the geofence of duty `duty_id`.
    fn check(&self, duty_id: &str, position: GeoPoint) -> Result<bool, ClientError> {
        let duties = self.lock_duties();
        let duty = duties
            .iter()
            .find(|d| d.id.as_deref() == Some(duty_id))
            .ok_or_else(|| ClientError::Server {
                status: 404,
                message: "Duty not found".to_string(),
            })?;
        Ok(check_position(duty, position).inside)
    }
}
