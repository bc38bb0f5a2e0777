//! Chat session logic and port traits for GymChat.
//!
//! This crate defines the "ports" (storage, transport and view traits) that
//! the infrastructure and CLI layers implement, and the session client that
//! drives them. It depends only on `gymchat-types` -- never on
//! `gymchat-infra` or any network/filesystem crate.

pub mod chat;
pub mod render;
pub mod storage;
pub mod transport;
