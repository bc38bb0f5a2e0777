//! Client configuration types for GymChat.
//!
//! `ClientConfig` represents `config.toml` in the data directory. Every field
//! has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Default number of turns kept in the transcript.
pub const DEFAULT_RETENTION: usize = 100;

/// Default storage key holding the serialized transcript.
pub const DEFAULT_STORAGE_KEY: &str = "gymchat_history";

/// Top-level configuration for the chat client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend origin; requests go to `{backend_url}/chat`.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Maximum number of turns kept, oldest evicted first.
    #[serde(default = "default_retention")]
    pub retention: usize,

    /// Key under which the transcript is persisted.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Whether the transcript is mirrored to durable storage.
    #[serde(default = "default_true")]
    pub persist: bool,

    /// Whether new turns carry a creation timestamp.
    #[serde(default)]
    pub timestamps: bool,

    /// Optional request timeout. Requests are not bounded by default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_retention() -> usize {
    DEFAULT_RETENTION
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            retention: default_retention(),
            storage_key: default_storage_key(),
            persist: true,
            timestamps: false,
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Retention bound with a floor of one turn.
    pub fn effective_retention(&self) -> usize {
        self.retention.max(1)
    }

    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.backend_url.trim_end_matches('/'))
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.backend_url.trim_end_matches('/'))
    }
}
