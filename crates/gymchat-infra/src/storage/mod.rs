//! Durable storage adapters for GymChat.

pub mod file_kv;

pub use file_kv::FileKvStore;
