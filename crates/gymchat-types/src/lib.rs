//! Shared domain types for GymChat.
//!
//! This crate contains the types used across the GymChat client:
//! conversation turns, the backend wire format, stored-history decoding,
//! client configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod stored;
pub mod wire;
