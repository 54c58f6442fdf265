use domain::models::{AccountKind, Credentials, TokenResponse};
use serde::de::IgnoredAny;

use crate::api::{fallback, AuthApi};
use crate::api_client::ApiClient;
use crate::error::ClientError;

fn login_path(kind: AccountKind) -> &'static [&'static str] {
    match kind {
        AccountKind::Admin => &["users", "admin", "login"],
        AccountKind::Officer => &["users", "login"],
    }
}

#[async_trait::async_trait]
impl AuthApi for ApiClient {
    async fn login(
        &self,
        kind: AccountKind,
        credentials: &Credentials,
    ) -> Result<TokenResponse, ClientError> {
        tracing::info!(empid = %credentials.empid, ?kind, "Logging in");
        self.post("login", login_path(kind), None, credentials, fallback::LOGIN)
            .await
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        tracing::info!(empid = %credentials.empid, "Registering admin account");
        // The success body differs between API versions; only its JSON-ness matters.
        let _: IgnoredAny = self
            .post(
                "register",
                &["users", "admin", "register"],
                None,
                credentials,
                fallback::REGISTER,
            )
            .await?;
        Ok(())
    }
}
