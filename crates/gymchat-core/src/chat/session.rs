//! The chat session client.
//!
//! `ChatSession` owns the transcript and drives one request/response cycle at
//! a time against the backend. A submission is a two-phase commit: the user
//! turn is appended and rendered provisionally, then either reconciled with
//! the backend's answer or kept and persisted alongside an error notice.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use gymchat_types::chat::{Role, Turn};
use gymchat_types::config::ClientConfig;
use gymchat_types::error::{FailureCategory, SessionError, TransportError};
use gymchat_types::stored::{decode_history, encode_history};
use gymchat_types::wire::{ChatRequest, ChatResponse};

use crate::chat::transcript::Transcript;
use crate::render::{ChatView, render};
use crate::storage::KvStore;
use crate::transport::ChatTransport;

/// Settings a session needs from the client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub storage_key: String,
    pub retention: usize,
    pub persist: bool,
    pub timestamps: bool,
}

impl From<&ClientConfig> for SessionConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            storage_key: config.storage_key.clone(),
            retention: config.effective_retention(),
            persist: config.persist,
            timestamps: config.timestamps,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

/// Operating state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingReply,
}

/// How a submission settled.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only input; nothing happened.
    Ignored,
    /// The backend answered; carries the rendered assistant turn.
    Replied(Turn),
    /// The request failed; carries the error notice appended to the transcript.
    Failed { notice: Turn, error: TransportError },
}

/// Chat session client over a store, a transport, and a view.
pub struct ChatSession<S, T, V> {
    store: S,
    transport: T,
    view: V,
    config: SessionConfig,
    transcript: Mutex<Transcript>,
    busy: AtomicBool,
}

/// Holds the busy flag for the duration of a submission.
///
/// Dropping it returns the session to idle, re-enables the view's input and
/// gives it focus, on every exit path.
struct BusyGuard<'a, V: ChatView> {
    busy: &'a AtomicBool,
    view: &'a V,
}

impl<V: ChatView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
        self.view.set_busy(false);
        self.view.focus_input();
    }
}

impl<S, T, V> ChatSession<S, T, V>
where
    S: KvStore,
    T: ChatTransport,
    V: ChatView,
{
    pub fn new(store: S, transport: T, view: V, config: SessionConfig) -> Self {
        let transcript = Mutex::new(Transcript::new(config.retention));
        Self {
            store,
            transport,
            view,
            config,
            transcript,
            busy: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> SessionState {
        if self.busy.load(Ordering::Acquire) {
            SessionState::AwaitingReply
        } else {
            SessionState::Idle
        }
    }

    /// Snapshot of the transcript in chronological order.
    pub fn transcript(&self) -> Vec<Turn> {
        self.lock_transcript().to_vec()
    }

    /// Restore the transcript from durable storage and render it.
    ///
    /// Malformed stored data is discarded (the key is removed) and the session
    /// starts empty. Restored turns are not written back. Returns the number
    /// of turns restored.
    pub async fn initialize(&self) -> usize {
        self.view.show_welcome();

        if !self.config.persist {
            return 0;
        }

        let key = self.config.storage_key.as_str();
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "No stored chat history");
                return 0;
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored chat history");
                return 0;
            }
        };

        let turns = match decode_history(&raw) {
            Ok(turns) => turns,
            Err(e) => {
                warn!(key, error = %e, "Discarding malformed stored chat history");
                self.lock_transcript().clear();
                if let Err(e) = self.store.remove(key).await {
                    warn!(key, error = %e, "Failed to remove malformed chat history");
                }
                return 0;
            }
        };

        let restored = {
            let mut transcript = self.lock_transcript();
            transcript.replace(turns);
            transcript.to_vec()
        };

        for turn in &restored {
            self.view.append(&render(turn));
        }

        info!(count = restored.len(), "Restored chat history");
        restored.len()
    }

    /// Send a message and settle the reply.
    ///
    /// Empty or whitespace-only text is ignored. A second submission while one
    /// is awaiting a reply is rejected with [`SessionError::Busy`]. Transport
    /// failures never surface as errors here: they settle as
    /// [`SubmitOutcome::Failed`] with a notice appended to the transcript.
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome, SessionError> {
        let message = text.trim();
        if message.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        let _guard = self.try_acquire().ok_or(SessionError::Busy)?;
        self.view.set_busy(true);

        let user_turn = self.new_turn(Turn::user(message));
        let request = {
            let mut transcript = self.lock_transcript();
            let history = transcript.wire_history();
            transcript.push(user_turn.clone());
            ChatRequest {
                message: message.to_string(),
                history,
            }
        };
        self.view.append(&render(&user_turn));

        debug!(
            endpoint = self.transport.endpoint(),
            history_len = request.history.len(),
            "Sending chat request"
        );

        let settled = match self.transport.send(&request).await {
            Ok(response) => self.reconcile(response),
            Err(e) => Err(e),
        };

        match settled {
            Ok(reply) => {
                self.persist().await;
                self.view.append(&render(&reply));
                info!(
                    transcript_len = self.lock_transcript().len(),
                    "Chat reply received"
                );
                Ok(SubmitOutcome::Replied(reply))
            }
            Err(error) => {
                warn!(error = %error, "Chat request failed");
                // The user turn is already in the transcript; keep it.
                self.persist().await;
                let notice = self.new_turn(Turn::error_notice(self.failure_notice(&error)));
                self.lock_transcript().push(notice.clone());
                self.view.append(&render(&notice));
                Ok(SubmitOutcome::Failed { notice, error })
            }
        }
    }

    /// Wipe the transcript and durable storage and reset the view.
    pub async fn clear(&self) -> Result<(), SessionError> {
        let _guard = self.try_acquire().ok_or(SessionError::Busy)?;

        self.lock_transcript().clear();
        if self.config.persist {
            let key = self.config.storage_key.as_str();
            if let Err(e) = self.store.remove(key).await {
                warn!(key, error = %e, "Failed to remove stored chat history");
            }
        }
        self.view.show_welcome();
        info!("Chat history cleared");
        Ok(())
    }

    /// Fold a successful response into the transcript and return the
    /// assistant turn to render.
    ///
    /// Server history, when present, replaces the local transcript and its
    /// last assistant entry is the turn rendered. The reply text is appended
    /// only when there is no history or the history holds no assistant turn,
    /// so whatever is rendered is also in the transcript.
    fn reconcile(&self, response: ChatResponse) -> Result<Turn, TransportError> {
        let reply = response.reply_text().map(str::to_owned);

        if let Some(error) = response.error {
            return Err(TransportError::Server(error));
        }

        let Some(history) = response.history else {
            let text = reply.ok_or_else(|| {
                TransportError::Malformed("response carries neither reply nor history".to_string())
            })?;
            let turn = self.new_turn(Turn::assistant(text));
            self.lock_transcript().push(turn.clone());
            return Ok(turn);
        };

        let mut transcript = self.lock_transcript();
        let incoming: Vec<Turn> = history.into_iter().map(Turn::from).collect();
        let merged = carry_timestamps(&transcript, incoming, self.config.timestamps);
        transcript.replace(merged);

        let last_assistant = transcript
            .iter()
            .rev()
            .find(|turn| turn.role == Role::Assistant && !turn.is_error)
            .cloned();

        match (last_assistant, reply) {
            (Some(turn), reply) => {
                if reply.is_some_and(|text| text != turn.content) {
                    debug!("Reply text differs from server history, rendering history");
                }
                Ok(turn)
            }
            (None, Some(text)) => {
                let turn = self.new_turn(Turn::assistant(text));
                transcript.push(turn.clone());
                Ok(turn)
            }
            (None, None) => Err(TransportError::Malformed(
                "history carries no assistant turn".to_string(),
            )),
        }
    }

    /// Mirror the transcript to durable storage. Failures are logged only.
    async fn persist(&self) {
        if !self.config.persist {
            return;
        }

        let encoded = {
            let transcript = self.lock_transcript();
            encode_history(transcript.persistable())
        };

        let key = self.config.storage_key.as_str();
        let result = match encoded {
            Ok(raw) => self.store.set(key, &raw).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            warn!(key, error = %e, "Failed to persist chat history");
        }
    }

    fn failure_notice(&self, error: &TransportError) -> String {
        match error.category() {
            FailureCategory::Unreachable => format!(
                "Error: Could not connect to the backend server.\n\nMake sure the backend server is running at `{}`.",
                self.transport.endpoint()
            ),
            FailureCategory::ServerReported => {
                let detail = error
                    .server_message()
                    .map(str::to_owned)
                    .unwrap_or_else(|| error.to_string());
                format!("Error: The server returned an error.\n\n{detail}")
            }
            FailureCategory::Malformed => {
                "Error: The server sent a response that could not be read.".to_string()
            }
        }
    }

    fn new_turn(&self, turn: Turn) -> Turn {
        if self.config.timestamps {
            turn.stamped()
        } else {
            turn
        }
    }

    fn try_acquire(&self) -> Option<BusyGuard<'_, V>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard {
                busy: &self.busy,
                view: &self.view,
            })
    }

    fn lock_transcript(&self) -> MutexGuard<'_, Transcript> {
        // Every mutation leaves the transcript consistent, so a poisoned
        // lock still guards valid data.
        self.transcript.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Keep local timestamps for server history entries that match local turns
/// in order; entries with no local counterpart are stamped when enabled.
fn carry_timestamps(local: &Transcript, incoming: Vec<Turn>, stamp_new: bool) -> Vec<Turn> {
    let local: Vec<&Turn> = local.persistable().collect();
    let mut cursor = 0;

    incoming
        .into_iter()
        .map(|mut turn| {
            let matched = local[cursor..]
                .iter()
                .position(|l| l.role == turn.role && l.content == turn.content);
            match matched {
                Some(offset) => {
                    turn.timestamp = local[cursor + offset].timestamp;
                    cursor += offset + 1;
                    turn
                }
                None if stamp_new => turn.stamped(),
                None => turn,
            }
        })
        .collect()
}
