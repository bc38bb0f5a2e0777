//! Interactive terminal chat for GymChat.
//!
//! The terminal plays the part of the chat page: a readline prompt is the
//! input box, `TerminalView` is the message list, and slash commands stand in
//! for the page's buttons. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
pub mod view;
