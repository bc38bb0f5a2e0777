//! HttpChatTransport -- concrete [`ChatTransport`] over reqwest.
//!
//! Failure mapping:
//! - the request could not be sent or the body could not be read → `Unreachable`
//! - non-2xx status → `Status`, with the body's `error`/`detail` string if any
//! - 2xx body that is not a chat response → `Malformed`
//!
//! A 2xx body carrying an `error` string is returned as-is; the session
//! decides what to do with it.

use std::time::Duration;

use serde_json::Value;

use gymchat_core::transport::ChatTransport;
use gymchat_types::config::ClientConfig;
use gymchat_types::error::TransportError;
use gymchat_types::wire::{ChatRequest, ChatResponse, HealthStatus};

/// Chat backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpChatTransport {
    client: reqwest::Client,
    base_url: String,
    chat_url: String,
    health_url: String,
}

impl HttpChatTransport {
    /// Create a transport for the backend named in `config`.
    ///
    /// No request timeout is applied unless `request_timeout_secs` is set.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Unreachable(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            chat_url: config.chat_url(),
            health_url: config.health_url(),
        })
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    /// Query `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        let (status, body) = read_body(response).await?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| TransportError::Malformed(format!("failed to parse health response: {e}")))
    }
}

impl ChatTransport for HttpChatTransport {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        tracing::debug!(url = %self.chat_url, "POST chat request");

        let response = self
            .client
            .post(&self.chat_url)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        let (status, body) = read_body(response).await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Chat request rejected");
            return Err(status_error(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| TransportError::Malformed(format!("failed to parse chat response: {e}")))
    }
}

async fn read_body(
    response: reqwest::Response,
) -> Result<(reqwest::StatusCode, String), TransportError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Unreachable(format!("failed to read response body: {e}")))?;
    Ok((status, body))
}

fn status_error(status: reqwest::StatusCode, body: &str) -> TransportError {
    TransportError::Status {
        status: status.as_u16(),
        message: error_message(body),
    }
}

/// Pull a human-readable message out of an error body.
///
/// Recognizes `{"error": "..."}` and `{"detail": ...}`; other bodies yield
/// no message.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let field = value.get("error").or_else(|| value.get("detail"))?;
    match field {
        Value::String(message) => Some(message.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
