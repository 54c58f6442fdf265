//! REST client for the duty API.
//!
//! [`ApiClient`] implements the [`AuthApi`], [`DutyApi`] and [`OfficerApi`]
//! traits over `reqwest`. Every authenticated call takes an explicit
//! [`Session`]; no token is read from ambient state.

pub mod api;
pub mod api_client;
mod endpoints;
pub mod error;
pub mod http;
pub mod mock;
pub mod session;

pub use api::{AuthApi, DutyApi, OfficerApi};
pub use api_client::ApiClient;
pub use error::ClientError;
pub use http::HttpConfig;
pub use mock::MockDutyApi;
pub use session::Session;
