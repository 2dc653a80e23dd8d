//! Task creation and editing.
//!
//! A [`TaskForm`] is validated locally against the acting user before
//! anything is sent. The resulting [`TaskPayload`] carries the derived
//! fields the backend expects: initial status, total minutes, and UTC
//! timestamps.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;
use tasklog_core::entities::Task;
use tasklog_core::enums::{TaskStatus, TaskType};

use crate::TasklogClient;
use crate::error::{ClientError, FormField, ValidationError};
use crate::query::Viewer;

/// Raw task form input. Timestamps may carry any offset; they are sent as
/// UTC.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub project_id: Option<i64>,
    pub title: String,
    pub details: String,
    pub task_type: Option<TaskType>,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub reviewer_id: Option<i64>,
    /// Task owner. Only privileged actors may set someone else.
    pub user_id: Option<i64>,
    pub backdated: bool,
    pub date: Option<NaiveDate>,
}

/// Body for the create and edit endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    pub user_id: i64,
    pub created_by: i64,
    pub project_id: i64,
    pub title: String,
    pub details: String,
    pub task_type: TaskType,
    pub date: NaiveDate,
    #[serde(with = "tasklog_core::timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "tasklog_core::timestamp::option")]
    pub end_time: Option<DateTime<Utc>>,
    pub reviewer_id: Option<i64>,
    pub is_backdated: bool,
    pub status: TaskStatus,
    pub total_time_minutes: i64,
}

/// Whole minutes from `start` to `end`, never negative.
#[must_use]
pub fn total_time_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_minutes().max(0)
}

impl TaskForm {
    /// Fields that are missing for `actor`, in form order.
    #[must_use]
    pub fn missing_fields(&self, actor: Viewer) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.project_id.is_none() {
            missing.push(FormField::ProjectId);
        }
        if self.title.trim().is_empty() {
            missing.push(FormField::Title);
        }
        if self.task_type.is_none() {
            missing.push(FormField::TaskType);
        }
        if self.start_time.is_none() {
            missing.push(FormField::StartTime);
        }
        if self.backdated {
            if self.end_time.is_none() {
                missing.push(FormField::EndTime);
            }
            if !actor.role.is_restricted() && self.user_id.is_none() {
                missing.push(FormField::UserId);
            }
        }
        missing
    }

    /// Validate and derive the wire payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming every missing field.
    pub fn to_payload(&self, actor: Viewer) -> Result<TaskPayload, ValidationError> {
        let missing = self.missing_fields(actor);
        let (Some(project_id), Some(task_type), Some(start)) =
            (self.project_id, self.task_type, self.start_time)
        else {
            return Err(ValidationError { fields: missing });
        };
        ValidationError::check(missing)?;
        let start_time = start.with_timezone(&Utc);
        let end_time = self.end_time.map(|end| end.with_timezone(&Utc));

        let total_time_minutes = match (self.backdated, end_time) {
            (true, Some(end)) => total_time_minutes(start_time, end),
            _ => 0,
        };
        let user_id = if actor.role.is_restricted() {
            actor.user_id
        } else {
            self.user_id.unwrap_or(actor.user_id)
        };

        Ok(TaskPayload {
            user_id,
            created_by: actor.user_id,
            project_id,
            title: self.title.trim().to_string(),
            details: self.details.trim().to_string(),
            task_type,
            date: self.date.unwrap_or_else(|| start_time.date_naive()),
            start_time,
            end_time,
            reviewer_id: self.reviewer_id,
            is_backdated: self.backdated,
            status: TaskStatus::initial(self.backdated),
            total_time_minutes,
        })
    }
}

impl TasklogClient {
    /// Create a task on behalf of the logged-in user.
    ///
    /// # Errors
    ///
    /// [`ClientError::Session`] when not logged in, [`ClientError::Validation`]
    /// before any request, or whatever the gateway returns.
    pub async fn create_task(&self, form: &TaskForm) -> Result<Task, ClientError> {
        let payload = self.payload_for(form)?;
        let task: Task = self.post_json("/tasks/create", &[], &payload).await?;
        tracing::debug!(task_id = task.id, backdated = payload.is_backdated, "task created");
        Ok(task)
    }

    /// Replace an existing task's fields.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_task`].
    pub async fn edit_task(&self, task_id: i64, form: &TaskForm) -> Result<Task, ClientError> {
        let payload = self.payload_for(form)?;
        let task: Task = self
            .put_json(&format!("/tasks/{task_id}/edit"), &[], Some(&payload))
            .await?;
        tracing::debug!(task_id, "task updated");
        Ok(task)
    }

    fn payload_for(&self, form: &TaskForm) -> Result<TaskPayload, ClientError> {
        let session = self.session().require_session()?;
        Ok(form.to_payload(Viewer::from_session(&session))?)
    }
}
