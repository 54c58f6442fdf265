//! REST client for the duty API.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::ClientError;
use crate::http::{create_http_client, read_json, HttpConfig, RequestTimer};
use crate::session::Session;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client for the duty API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the API at `config.base_url`.
    pub fn new(config: &HttpConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(config.base_url.clone()));
        }
        let http = create_http_client(config)?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds an endpoint URL from path segments. Segments are
    /// percent-encoded, so ids cannot escape their position in the path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, session: Option<&Session>) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match session {
            Some(session) => builder.header(AUTHORIZATION, session.bearer()),
            None => builder,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        segments: &[&str],
        session: Option<&Session>,
        fallback: &str,
    ) -> Result<T, ClientError> {
        self.call::<(), T>(operation, Method::GET, segments, session, None, fallback)
            .await
    }

    pub(crate) async fn post<B, T>(
        &self,
        operation: &'static str,
        segments: &[&str],
        session: Option<&Session>,
        body: &B,
        fallback: &str,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(operation, Method::POST, segments, session, Some(body), fallback)
            .await
    }

    /// Sends a request and decodes the JSON response.
    pub(crate) async fn call<B, T>(
        &self,
        operation: &'static str,
        method: Method,
        segments: &[&str],
        session: Option<&Session>,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "api_call",
            operation,
            %request_id,
            method = %method,
            path = %url.path()
        );

        async move {
            let mut builder = self
                .request(method, url, session)
                .header(REQUEST_ID_HEADER, request_id.to_string());
            if let Some(body) = body {
                builder = builder.json(body);
            }

            let timer = RequestTimer::new(operation);
            let sent = builder.send().await;
            timer.record();

            let response = sent.map_err(|e| {
                tracing::warn!(error = %e, "Request failed without a response");
                ClientError::Transport(e)
            })?;

            let status = response.status();
            let result = read_json(response, fallback).await;
            match &result {
                Ok(_) => tracing::debug!(status = status.as_u16(), "API call succeeded"),
                Err(e) => tracing::warn!(status = status.as_u16(), error = %e, "API call failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}
