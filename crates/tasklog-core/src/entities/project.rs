use serde::{Deserialize, Serialize};

/// A project tasks are booked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub project_code: Option<String>,
    pub project_name: String,
    #[serde(default)]
    pub project_description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}
