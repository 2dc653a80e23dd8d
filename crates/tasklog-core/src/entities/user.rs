use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Full user record from the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub role: Role,
    #[serde(rename = "EmpCode", default)]
    pub emp_code: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub reporting_manager: Option<i64>,
    #[serde(rename = "TL", default)]
    pub team_lead: Option<i64>,
    #[serde(default)]
    pub is_active: bool,
}

/// Reduced user record: the people the current viewer may filter by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleUser {
    pub id: i64,
    pub name: String,
    pub role: Role,
}
