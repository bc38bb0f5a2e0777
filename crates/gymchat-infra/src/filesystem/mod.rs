//! Data directory layout for GymChat.
//!
//! ```text
//! {data_dir}/
//!   config.toml
//!   storage/
//!     gymchat_history.json
//! ```

use std::path::{Path, PathBuf};

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `GYMCHAT_DATA_DIR` environment variable
/// 2. `~/.gymchat`
/// 3. `.gymchat` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("GYMCHAT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".gymchat");
    }

    PathBuf::from(".gymchat")
}

/// Directory holding the key-value store files.
pub fn storage_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("storage")
}
