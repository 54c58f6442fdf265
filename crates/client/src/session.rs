//! Session context passed to every authenticated call.

use shared::jwt::{inspect_token, JwtError, TokenClaims};

/// An authenticated session: the bearer token obtained at login.
///
/// Created by the console's session boundary (login or a stored token) and
/// handed to API calls explicitly.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value of the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Unverified claims of the token, for display.
    pub fn claims(&self) -> Result<TokenClaims, JwtError> {
        inspect_token(&self.token)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
