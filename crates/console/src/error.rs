use client::ClientError;
use domain::services::{AssignGuardError, FormError};
use shared::jwt::JwtError;
use thiserror::Error;

/// Errors surfaced by console operations.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Assign(#[from] AssignGuardError),

    #[error("{0}")]
    Validation(String),

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Token(#[from] JwtError),

    /// The dashboard could not be loaded.
    #[error("{0}")]
    Refresh(String),

    #[error("No duty with id {0} is assigned to you")]
    UnknownDuty(String),

    #[error("{0}")]
    Usage(String),
}

impl ConsoleError {
    /// The error for a command that needs a stored token.
    pub fn missing_token() -> Self {
        ConsoleError::Client(ClientError::MissingToken)
    }
}

impl From<validator::ValidationErrors> for ConsoleError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .iter()
            .flat_map(|(_, errors)| errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Validation failed".to_string());

        ConsoleError::Validation(message)
    }
}
