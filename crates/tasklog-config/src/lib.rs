//! # tasklog-config
//!
//! Layered configuration loading for tasklog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKLOG_*` prefix, `__` as separator)
//! 2. Project-level `.tasklog/config.toml`
//! 3. User-level `~/.config/tasklog/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKLOG_API__BASE_URL` -> `api.base_url`,
//! `TASKLOG_GENERAL__PAGE_SIZE` -> `general.page_size`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tasklog_config::TasklogConfig;
//!
//! let config = TasklogConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TasklogConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TasklogConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if one exists.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".tasklog/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TASKLOG_").split("__"))
    }

    /// Reject values the client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.general.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tasklog").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TasklogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.general.page_size, 10);
        assert!(config.session.use_keyring);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = TasklogConfig::figment();
        let config: TasklogConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.general.timezone, "UTC");
    }
}
