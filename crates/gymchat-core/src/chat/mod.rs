//! Chat session client for GymChat.
//!
//! - `Transcript`: bounded, ordered list of turns
//! - `ChatSession`: initialize / submit / clear against the storage,
//!   transport and view ports
//! - `quick`: canned prompts offered next to the input

pub mod quick;
pub mod session;
pub mod transcript;

pub use session::{ChatSession, SessionConfig, SessionState, SubmitOutcome};
pub use transcript::Transcript;
