use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{TaskStatus, TaskType};

/// A time-tracked unit of work.
///
/// `status` only moves on the server. A backdated task starts in
/// `To Be Approved`; anything else starts `In Progress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub created_by: i64,
    pub project_id: i64,
    #[serde(alias = "task_title")]
    pub title: String,
    #[serde(alias = "task_details", default)]
    pub details: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(with = "crate::timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "crate::timestamp::option", default)]
    pub end_time: Option<DateTime<Utc>>,
    pub task_type: TaskType,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub is_backdated: bool,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub total_time_minutes: Option<f64>,
    #[serde(default)]
    pub reviewer_id: Option<i64>,
}

impl Task {
    /// Whether `user_id` owns this task.
    #[must_use]
    pub const fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    /// Logged on behalf of the owner by someone else (typically a manager).
    #[must_use]
    pub const fn entered_by_other(&self) -> bool {
        self.user_id != self.created_by
    }
}
