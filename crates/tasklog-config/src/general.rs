//! General client behaviour.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

const fn default_page_size() -> u32 {
    10
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Rows per page in the task list.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Viewer's IANA timezone, sent with report downloads.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Directory downloaded reports are written to.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            timezone: default_timezone(),
            report_dir: default_report_dir(),
        }
    }
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.timezone.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.timezone".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
