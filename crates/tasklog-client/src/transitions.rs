//! Status transitions and deletion, plus the per-task action gate.

use chrono::{DateTime, Utc};
use tasklog_core::entities::Task;
use tasklog_core::enums::TaskStatus;

use crate::TasklogClient;
use crate::error::ClientError;
use crate::query::Viewer;

/// Which actions to offer a viewer for a given task. The server remains the
/// authority; this only decides what is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct TaskActions {
    pub complete: bool,
    pub approve: bool,
    pub edit: bool,
    pub delete: bool,
}

impl TaskActions {
    #[must_use]
    pub fn for_task(task: &Task, viewer: Viewer) -> Self {
        let may_touch = task.is_owned_by(viewer.user_id) || viewer.role.can_edit_others();
        let status = task.status.unwrap_or(TaskStatus::initial(task.is_backdated));
        Self {
            complete: may_touch && status.can_transition_to(TaskStatus::Done),
            approve: viewer.role.can_approve()
                && !task.is_approved
                && status.can_transition_to(TaskStatus::Approved),
            edit: may_touch && !task.is_approved,
            delete: may_touch,
        }
    }
}

impl TasklogClient {
    /// Mark an in-progress task done. Without `end_time` the server uses
    /// its own clock.
    ///
    /// # Errors
    ///
    /// Whatever the gateway returns; the server rejects tasks that are not
    /// in progress.
    pub async fn complete_task(
        &self,
        task_id: i64,
        end_time: Option<DateTime<Utc>>,
    ) -> Result<Task, ClientError> {
        let query: Vec<(&str, String)> = end_time
            .map(|end| {
                (
                    "end_time",
                    end.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                )
            })
            .into_iter()
            .collect();
        let task = self
            .put_json::<(), Task>(&format!("/tasks/{task_id}/complete"), &query, None)
            .await?;
        tracing::debug!(task_id, "task completed");
        Ok(task)
    }

    /// Approve a backdated task.
    ///
    /// # Errors
    ///
    /// Whatever the gateway returns.
    pub async fn approve_task(&self, task_id: i64) -> Result<Task, ClientError> {
        let task = self
            .put_json::<(), Task>(&format!("/tasks/{task_id}/approve"), &[], None)
            .await?;
        tracing::debug!(task_id, "task approved");
        Ok(task)
    }

    /// # Errors
    ///
    /// Whatever the gateway returns.
    pub async fn delete_task(&self, task_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/tasks/{task_id}")).await?;
        tracing::debug!(task_id, "task deleted");
        Ok(())
    }
}
