//! Token persistence between console invocations.

use std::path::{Path, PathBuf};

use client::Session;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::ConsoleError;

/// Storage for the access token obtained at login.
#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    async fn set_token(&self, token: &str) -> Result<(), ConsoleError>;

    async fn get_token(&self) -> Result<Option<String>, ConsoleError>;

    async fn clear_token(&self) -> Result<(), ConsoleError>;

    /// The stored token as a [`Session`], or the "please log in" error.
    async fn session(&self) -> Result<Session, ConsoleError> {
        self.get_token()
            .await?
            .map(Session::new)
            .ok_or_else(ConsoleError::missing_token)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    #[serde(rename = "accessToken")]
    access_token: String,
}

/// Token store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl TokenStore for FileTokenStore {
    async fn set_token(&self, token: &str) -> Result<(), ConsoleError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_vec(&StoredToken {
            access_token: token.to_string(),
        })?;
        tokio::fs::write(&self.path, body).await?;
        tracing::debug!(path = %self.path.display(), "Stored access token");
        Ok(())
    }

    async fn get_token(&self) -> Result<Option<String>, ConsoleError> {
        let body = match tokio::fs::read(&self.path).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: StoredToken = serde_json::from_slice(&body)?;
        if stored.access_token.is_empty() {
            return Ok(None);
        }
        Ok(Some(stored.access_token))
    }

    async fn clear_token(&self) -> Result<(), ConsoleError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Cleared access token");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait::async_trait]
impl TokenStore for MemoryTokenStore {
    async fn set_token(&self, token: &str) -> Result<(), ConsoleError> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn get_token(&self) -> Result<Option<String>, ConsoleError> {
        Ok(self.token.read().await.clone())
    }

    async fn clear_token(&self) -> Result<(), ConsoleError> {
        *self.token.write().await = None;
        Ok(())
    }
}
