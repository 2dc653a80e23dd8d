//! Where the login session is persisted.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_keyring_service() -> String {
    "tasklog-cli".to_string()
}

const fn default_use_keyring() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// OS keychain service name. Override for tests to keep real credentials untouched.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Try the OS keychain before the session file.
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,

    /// Session file location. Defaults to `~/.tasklog/session.json`.
    #[serde(default)]
    pub file_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
            use_keyring: default_use_keyring(),
            file_path: None,
        }
    }
}

impl SessionConfig {
    /// Resolved session file path, `None` when no home directory exists.
    #[must_use]
    pub fn resolved_file_path(&self) -> Option<PathBuf> {
        self.file_path
            .clone()
            .or_else(|| dirs::home_dir().map(|h| h.join(".tasklog").join("session.json")))
    }
}
