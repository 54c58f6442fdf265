//! Login, registration and logout flows.

use client::{AuthApi, Session};
use domain::models::{AccountKind, Credentials};
use shared::jwt::TokenClaims;
use validator::Validate;

use crate::error::ConsoleError;
use crate::session::TokenStore;

pub const REGISTRATION_SUCCESS: &str = "Registration successful! You can now log in.";

/// Logs in and stores the token. Nothing is stored on failure.
pub async fn login<A, S>(
    api: &A,
    store: &S,
    kind: AccountKind,
    credentials: &Credentials,
) -> Result<Session, ConsoleError>
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    credentials.validate()?;

    let response = api.login(kind, credentials).await.map_err(|e| {
        tracing::warn!(empid = %credentials.empid, error = %e, "Login rejected");
        e
    })?;
    store.set_token(&response.access_token).await?;

    tracing::info!(empid = %credentials.empid, ?kind, "Logged in");
    Ok(Session::new(response.access_token))
}

/// Registers an admin account after checking the password confirmation.
pub async fn register<A>(
    api: &A,
    credentials: &Credentials,
    confirm_password: &str,
) -> Result<(), ConsoleError>
where
    A: AuthApi + ?Sized,
{
    if credentials.password != confirm_password {
        return Err(ConsoleError::PasswordMismatch);
    }
    credentials.validate()?;

    api.register(credentials).await?;
    tracing::info!(empid = %credentials.empid, "Registered account");
    Ok(())
}

pub async fn logout<S: TokenStore + ?Sized>(store: &S) -> Result<(), ConsoleError> {
    store.clear_token().await?;
    tracing::info!("Logged out");
    Ok(())
}

/// Claims of the stored token.
pub async fn whoami<S: TokenStore + ?Sized>(store: &S) -> Result<TokenClaims, ConsoleError> {
    let session = store.session().await?;
    Ok(session.claims()?)
}
