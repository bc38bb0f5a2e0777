//! Decoding of persisted transcripts.
//!
//! Two record shapes exist in stored history:
//!
//! - current: `{"role": "user"|"assistant", "content": "..."}` (plus the
//!   optional `isError` and `timestamp` fields of [`Turn`])
//! - legacy: `{"sender": "user"|"ai", "text": "..."}` written by older clients
//!
//! Each element is decoded as current shape first, then legacy shape, and is
//! dropped when it matches neither. The payload as a whole must be a JSON
//! array; anything else is reported as [`StorageError::Malformed`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::chat::{Role, Turn};
use crate::error::StorageError;

/// Legacy record as written by the first widget versions.
#[derive(Debug, Deserialize)]
struct LegacyRecord {
    sender: String,
    text: String,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
}

/// Result of decoding a single stored element.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredRecord {
    Current(Turn),
    Legacy(Turn),
    Rejected,
}

impl StoredRecord {
    /// Classify one JSON element.
    pub fn decode(value: &Value) -> Self {
        if let Ok(turn) = Turn::deserialize(value) {
            return StoredRecord::Current(turn);
        }

        if let Ok(legacy) = LegacyRecord::deserialize(value) {
            if let Some(role) = legacy_role(&legacy.sender) {
                return StoredRecord::Legacy(Turn {
                    role,
                    content: legacy.text,
                    is_error: false,
                    timestamp: legacy.timestamp,
                });
            }
        }

        StoredRecord::Rejected
    }

    pub fn into_turn(self) -> Option<Turn> {
        match self {
            StoredRecord::Current(turn) | StoredRecord::Legacy(turn) => Some(turn),
            StoredRecord::Rejected => None,
        }
    }
}

/// Map a legacy `sender` value onto a role.
fn legacy_role(sender: &str) -> Option<Role> {
    match sender.to_lowercase().as_str() {
        "user" => Some(Role::User),
        "ai" | "bot" | "assistant" => Some(Role::Assistant),
        _ => None,
    }
}

/// Decode a serialized transcript, normalizing legacy records and dropping
/// unrecognized ones.
pub fn decode_history(raw: &str) -> Result<Vec<Turn>, StorageError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| StorageError::Malformed(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(StorageError::Malformed(
            "stored history is not an array".to_string(),
        ));
    };

    Ok(items
        .iter()
        .filter_map(|item| StoredRecord::decode(item).into_turn())
        .collect())
}

/// Serialize turns in the current shape.
pub fn encode_history<'a>(turns: impl IntoIterator<Item = &'a Turn>) -> Result<String, StorageError> {
    let turns: Vec<&Turn> = turns.into_iter().collect();
    serde_json::to_string(&turns).map_err(|e| StorageError::Malformed(e.to_string()))
}
