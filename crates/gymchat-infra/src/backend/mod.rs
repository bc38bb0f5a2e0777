//! HTTP client for the chat backend.
//!
//! This module provides the [`HttpChatTransport`] which implements the
//! [`ChatTransport`](gymchat_core::transport::ChatTransport) trait for the
//! backend's `POST /chat` endpoint and also exposes `GET /health`.

pub mod client;

pub use client::HttpChatTransport;
