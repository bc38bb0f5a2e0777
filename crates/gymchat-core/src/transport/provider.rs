//! ChatTransport trait definition.

use gymchat_types::error::TransportError;
use gymchat_types::wire::{ChatRequest, ChatResponse};

/// Trait for the chat backend.
///
/// One call is one `POST /chat`. Implementations map every failure (no
/// connection, non-success status, `error` body, undecodable body) onto a
/// [`TransportError`]. There is no cancellation and no retry at this level.
pub trait ChatTransport: Send + Sync {
    /// Human-readable description of the endpoint (used in notices and logs).
    fn endpoint(&self) -> &str;

    /// Send one chat request and await the backend's answer.
    fn send(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<ChatResponse, TransportError>> + Send;
}
