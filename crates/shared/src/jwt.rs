//! Inspection of bearer tokens issued by the duty API.
//!
//! The console never holds the signing secret, so claims are read without
//! signature verification. They are only used for display (who is signed in,
//! when the token lapses); the server remains the authority.

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for token inspection.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to decode token: {0}")]
    DecodingError(String),

    #[error("Invalid token")]
    InvalidToken,
}

/// Claims carried by an access token.
///
/// Every field is optional; the API has issued tokens keyed by `empid` as
/// well as by `sub`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub empid: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Expiration time (Unix timestamp)
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Best display name for the token holder.
    pub fn subject(&self) -> Option<&str> {
        self.empid.as_deref().or(self.sub.as_deref())
    }

    /// Expiration as an instant, if the token carries one.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    /// Whether the token has lapsed at `now`. Tokens without `exp` never do.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map(|exp| exp <= now).unwrap_or(false)
    }
}

/// Reads the claims of a token without verifying its signature.
pub fn inspect_token(token: &str) -> Result<TokenClaims, JwtError> {
    if token.split('.').count() != 3 {
        return Err(JwtError::InvalidToken);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::InvalidToken => JwtError::InvalidToken,
            _ => JwtError::DecodingError(e.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn sign(claims: &serde_json::Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_inspect_token_reads_empid_and_exp() {
        let token = sign(&serde_json::json!({
            "empid": "ADM-001",
            "role": "ADMIN",
            "exp": 1_900_000_000i64
        }));

        let claims = inspect_token(&token).unwrap();
        assert_eq!(claims.subject(), Some("ADM-001"));
        assert_eq!(claims.role.as_deref(), Some("ADMIN"));
        assert_eq!(claims.exp, Some(1_900_000_000));
    }

    #[test]
    fn test_inspect_token_falls_back_to_sub() {
        let token = sign(&serde_json::json!({ "sub": "user-9" }));
        let claims = inspect_token(&token).unwrap();
        assert_eq!(claims.subject(), Some("user-9"));
        assert!(claims.expires_at().is_none());
    }

    #[test]
    fn test_inspect_token_rejects_garbage() {
        assert!(matches!(
            inspect_token("not-a-token"),
            Err(JwtError::InvalidToken)
        ));
        assert!(inspect_token("a.b.c").is_err());
    }

    #[test]
    fn test_is_expired_at() {
        let claims = TokenClaims {
            exp: Some(1_000),
            ..Default::default()
        };
        let before = Utc.timestamp_opt(999, 0).unwrap();
        let after = Utc.timestamp_opt(1_001, 0).unwrap();
        assert!(!claims.is_expired_at(before));
        assert!(claims.is_expired_at(after));
        assert!(!TokenClaims::default().is_expired_at(after));
    }
}
