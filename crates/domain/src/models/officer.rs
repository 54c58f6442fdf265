//! Officer domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of an account in the user-management service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Officer,
    /// Any role this console does not know about, kept verbatim.
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::Officer => "OFFICER",
            Role::Other(s) => s,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ADMIN" => Role::Admin,
            "OFFICER" => Role::Officer,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_role() -> Role {
    Role::Officer
}

/// An officer as listed by `GET /duties/users/all`.
///
/// Identity is `id`; `empid` is the human-facing employee code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
    pub id: String,
    pub empid: String,
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::models::instant::option"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Officer {
    pub fn new(id: impl Into<String>, empid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            empid: empid.into(),
            role: Role::Officer,
            profile_image: None,
            created_at: None,
        }
    }
}
