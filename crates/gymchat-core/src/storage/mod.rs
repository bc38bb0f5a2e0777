//! Storage abstractions for GymChat.
//!
//! Defines the key-value store the transcript is mirrored to. Durable
//! implementations live in gymchat-infra; an in-memory one backs the
//! session tests.

pub mod kv_store;
#[cfg(test)]
pub mod memory;

pub use kv_store::KvStore;
#[cfg(test)]
pub use memory::MemoryKvStore;
