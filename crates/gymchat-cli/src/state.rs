//! Application state wiring the session to its concrete adapters.
//!
//! The session is generic over store/transport/view traits; AppState pins
//! the store and transport to the infra implementations and leaves the view
//! to the caller.

use std::path::PathBuf;

use anyhow::Context;

use gymchat_core::chat::{ChatSession, SessionConfig};
use gymchat_core::render::ChatView;
use gymchat_infra::backend::HttpChatTransport;
use gymchat_infra::config::load_client_config;
use gymchat_infra::filesystem::{resolve_data_dir, storage_dir};
use gymchat_infra::storage::FileKvStore;
use gymchat_types::config::ClientConfig;

/// Session pinned to the file store and the HTTP transport.
pub type ConcreteSession<V> = ChatSession<FileKvStore, HttpChatTransport, V>;

/// Command-line overrides applied on top of `config.toml`.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub no_persist: bool,
}

/// Resolved configuration and data directory.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ClientConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load `config.toml` from the data directory and apply overrides.
    pub async fn init(overrides: &ConfigOverrides) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let mut config = load_client_config(&data_dir).await;

        if let Some(url) = &overrides.backend_url {
            config.backend_url = url.clone();
        }
        if overrides.no_persist {
            config.persist = false;
        }

        tracing::debug!(
            data_dir = %data_dir.display(),
            backend = %config.backend_url,
            persist = config.persist,
            "Client configuration resolved"
        );

        Ok(Self { config, data_dir })
    }

    pub fn store(&self) -> FileKvStore {
        FileKvStore::new(storage_dir(&self.data_dir))
    }

    pub fn transport(&self) -> anyhow::Result<HttpChatTransport> {
        HttpChatTransport::new(&self.config).context("Failed to create backend client")
    }

    /// Build a chat session drawing into `view`.
    pub fn session<V: ChatView>(&self, view: V) -> anyhow::Result<ConcreteSession<V>> {
        Ok(ChatSession::new(
            self.store(),
            self.transport()?,
            view,
            SessionConfig::from(&self.config),
        ))
    }
}
