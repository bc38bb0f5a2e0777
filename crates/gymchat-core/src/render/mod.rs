//! Rendering of turns: markdown formatting, bubble projection, and the
//! `ChatView` trait that sessions draw into.

pub mod bubble;
pub mod format;
pub mod view;

pub use bubble::{Bubble, Side, render};
pub use view::{ChatView, NullView};
