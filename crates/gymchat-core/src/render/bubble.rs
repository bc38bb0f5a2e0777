//! Projection of a turn into a message bubble.

use gymchat_types::chat::{Role, Turn};

use super::format::format_message;

/// Which side of the message list a bubble sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Assistant messages.
    Left,
    /// User messages.
    Right,
}

/// Everything a view needs to display one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub role: Role,
    pub side: Side,
    pub avatar: &'static str,
    /// Classes of the outer message element.
    pub message_class: String,
    /// Classes of the content element; error notices add `error-msg`.
    pub content_class: String,
    /// Formatted HTML content.
    pub html: String,
    /// Raw markdown source, for views that do their own formatting.
    pub source: String,
    pub is_error: bool,
}

impl Bubble {
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"{}\"><div class=\"message-avatar\">{}</div><div class=\"{}\">{}</div></div>",
            self.message_class, self.avatar, self.content_class, self.html
        )
    }
}

/// Render a turn into a bubble.
pub fn render(turn: &Turn) -> Bubble {
    let (side, avatar, sender) = match turn.role {
        Role::User => (Side::Right, "👤", "user"),
        Role::Assistant => (Side::Left, "🤖", "ai"),
    };

    let content_class = if turn.is_error {
        "message-content error-msg".to_string()
    } else {
        "message-content".to_string()
    };

    Bubble {
        role: turn.role,
        side,
        avatar,
        message_class: format!("message {sender}-msg"),
        content_class,
        html: format_message(&turn.content),
        source: turn.content.clone(),
        is_error: turn.is_error,
    }
}
