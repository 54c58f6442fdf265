//! HTTP client construction and response decoding.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use metrics::histogram;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    /// Per-request timeout; `0` disables it.
    pub request_timeout_secs: u64,
    /// Headers sent with every request.
    pub extra_headers: HashMap<String, String>,
}

/// Creates the shared `reqwest` client with the given configuration.
pub fn create_http_client(config: &HttpConfig) -> Result<Client, ClientError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.extra_headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ClientError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ClientError::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        headers.insert(header_name, header_value);
    }

    let mut builder = Client::builder()
        .default_headers(headers)
        .user_agent(concat!("duty-console/", env!("CARGO_PKG_VERSION")));
    if config.request_timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
    }
    builder.build().map_err(ClientError::Transport)
}

/// Extracts a human-readable message from an error body.
///
/// Accepts `{"detail": "..."}` and the validation shape
/// `{"detail": [{"msg": "..."}, ...]}`.
pub fn extract_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// Decodes a response body given its status.
///
/// - success + parseable JSON: the decoded value
/// - success + anything else: [`ClientError::MalformedResponse`]
/// - failure + JSON: [`ClientError::Server`] with the detail or `fallback`
/// - failure + non-JSON: [`ClientError::MalformedResponse`]
pub fn decode_body<T: DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> Result<T, ClientError> {
    if !(200..300).contains(&status) {
        return Err(match serde_json::from_str::<Value>(body) {
            Ok(json) => ClientError::Server {
                status,
                message: extract_detail(&json).unwrap_or_else(|| fallback.to_string()),
            },
            Err(_) => ClientError::malformed(fallback),
        });
    }

    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(status, error = %e, "Response body is not the expected JSON");
        ClientError::malformed(fallback)
    })
}

/// Reads a response and decodes it with [`decode_body`].
pub async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    fallback: &str,
) -> Result<T, ClientError> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    decode_body(status, &body, fallback)
}

/// Times an API call and records it.
///
/// Usage:
/// ```ignore
/// let timer = RequestTimer::new("list_duties");
/// let response = request.send().await;
/// timer.record();
/// ```
pub struct RequestTimer {
    operation: &'static str,
    start: Instant,
}

impl RequestTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: Instant::now(),
        }
    }

    /// Records the elapsed duration.
    pub fn record(self) {
        let elapsed = self.start.elapsed();
        histogram!(
            "api_request_duration_seconds",
            "operation" => self.operation
        )
        .record(elapsed.as_secs_f64());
        tracing::debug!(
            operation = self.operation,
            elapsed_ms = elapsed.as_millis() as u64,
            "API call finished"
        );
    }
}
