//! Wire format of the backend `/chat` and `/health` endpoints.

use serde::{Deserialize, Serialize};

use crate::chat::{Role, Turn};

/// A role/content pair as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

impl From<&Turn> for HistoryEntry {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role,
            content: turn.content.clone(),
        }
    }
}

impl From<HistoryEntry> for Turn {
    fn from(entry: HistoryEntry) -> Self {
        Turn::new(entry.role, entry.content)
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryEntry>,
}

/// Body of a `/chat` response.
///
/// Backend versions differ: some answer with `reply`, some with `response`,
/// newer ones also return the full `history`. A body may also carry an
/// `error` string in place of a reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    /// The assistant's reply text, preferring `reply` over `response`.
    pub fn reply_text(&self) -> Option<&str> {
        self.reply.as_deref().or(self.response.as_deref())
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_running(&self) -> bool {
        self.status.eq_ignore_ascii_case("running") || self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_empty_history() {
        let req = ChatRequest {
            message: "hi".to_string(),
            history: Vec::new(),
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({"message": "hi"}));
    }

    #[test]
    fn test_reply_text_prefers_reply() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"reply": "a", "response": "b"}"#).unwrap();
        assert_eq!(resp.reply_text(), Some("a"));

        let resp: ChatResponse = serde_json::from_str(r#"{"response": "b"}"#).unwrap();
        assert_eq!(resp.reply_text(), Some("b"));
    }

    #[test]
    fn test_response_with_history() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"reply": "ok", "history": [{"role": "user", "content": "q"}, {"role": "assistant", "content": "ok"}]}"#,
        )
        .unwrap();
        let history = resp.history.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(Turn::from(history[1].clone()), Turn::assistant("ok"));
    }

    #[test]
    fn test_history_entry_drops_local_fields() {
        let entry = HistoryEntry::from(&Turn::error_notice("down").stamped());
        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            serde_json::json!({"role": "assistant", "content": "down"})
        );
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status": "running", "service": "Fitness AI Assistant"}"#)
                .unwrap();
        assert!(health.is_running());
        assert_eq!(health.service.as_deref(), Some("Fitness AI Assistant"));
    }
}
