//! Backend transport abstraction for GymChat.
//!
//! - `ChatTransport`: RPITIT trait for the `/chat` request/response pair
//!
//! The reqwest implementation lives in gymchat-infra.

pub mod provider;

pub use provider::ChatTransport;
