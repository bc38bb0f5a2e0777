//! ChatView trait: the display surface driven by a chat session.

use super::bubble::Bubble;

/// Display surface for a chat session (a page, a terminal, a test recorder).
///
/// Calls are synchronous and infallible; a view that cannot draw should log
/// and carry on rather than fail the session.
pub trait ChatView: Send + Sync {
    /// Reset to the initial welcome state (no messages shown).
    fn show_welcome(&self);

    /// Append a bubble to the message list. The first append after
    /// `show_welcome` replaces the welcome placeholder.
    fn append(&self, bubble: &Bubble);

    /// Disable (`true`) or re-enable (`false`) the input surface.
    fn set_busy(&self, busy: bool);

    /// Return keyboard focus to the input surface.
    fn focus_input(&self);
}

/// A view that displays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl ChatView for NullView {
    fn show_welcome(&self) {}
    fn append(&self, _bubble: &Bubble) {}
    fn set_busy(&self, _busy: bool) {}
    fn focus_input(&self) {}
}
