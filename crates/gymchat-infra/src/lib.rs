//! Infrastructure layer for GymChat.
//!
//! Contains implementations of the ports defined in `gymchat-core`: the
//! reqwest-based backend transport and the file-backed key-value store, plus
//! the data directory layout and the `config.toml` loader.

pub mod backend;
pub mod config;
pub mod filesystem;
pub mod storage;
