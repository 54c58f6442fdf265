//! Authentication payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which login endpoint a credential pair is meant for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccountKind {
    #[default]
    Admin,
    Officer,
}

/// Request payload for login and registration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, max = 64, message = "Employee ID must be 1-64 characters"))]
    pub empid: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Credentials {
    pub fn new(empid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            empid: empid.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("empid", &self.empid)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("ADM-1", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("ADM-1"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_validation() {
        assert!(Credentials::new("ADM-1", "pw").validate().is_ok());
        assert!(Credentials::new("", "pw").validate().is_err());
        assert!(Credentials::new("ADM-1", "").validate().is_err());
    }

    #[test]
    fn test_token_response_deserialization() {
        let json = r#"{"access_token":"abc.def.ghi","token_type":"bearer"}"#;
        let resp: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "abc.def.ghi");
        assert_eq!(resp.token_type.as_deref(), Some("bearer"));
    }
}
