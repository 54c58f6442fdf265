//! Domain models for the duty console.

pub mod auth;
pub mod check_in;
pub mod duty;
pub mod instant;
pub mod map;
pub mod officer;
pub mod roster;
pub mod verification;

pub use auth::{AccountKind, Credentials, TokenResponse};
pub use check_in::{CheckInRequest, CheckInResponse, LocationUpdateRequest, LocationUpdateResponse};
pub use duty::{CreateDutyRequest, Duty, DutyStatus, DEFAULT_RADIUS_METERS};
pub use map::{GeoPoint, MapMarker, MapView, DEFAULT_CENTER, DEFAULT_ZOOM};
pub use officer::{Officer, Role};
pub use roster::OfficerWithDuty;
pub use verification::VerificationStatus;
