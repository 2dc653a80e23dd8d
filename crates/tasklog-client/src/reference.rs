//! Reference data used to fill selection lists.

use tasklog_core::entities::{Project, User, VisibleUser};
use tasklog_core::enums::Role;

use crate::TasklogClient;
use crate::error::ClientError;

impl TasklogClient {
    /// # Errors
    ///
    /// Whatever the gateway returns.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.get_json("/projects/", &[]).await
    }

    /// Full user directory, optionally narrowed by role and active flag.
    ///
    /// # Errors
    ///
    /// Whatever the gateway returns.
    pub async fn list_users(
        &self,
        role: Option<Role>,
        active: Option<bool>,
    ) -> Result<Vec<User>, ClientError> {
        let mut query = Vec::new();
        if let Some(role) = role {
            query.push(("role", role.as_str().to_string()));
        }
        if let Some(active) = active {
            query.push(("active", active.to_string()));
        }
        self.get_json("/users/", &query).await
    }

    /// Users the logged-in viewer may filter by. The server scopes this by
    /// role: an employee sees only themself.
    ///
    /// # Errors
    ///
    /// Whatever the gateway returns.
    pub async fn visible_users(&self) -> Result<Vec<VisibleUser>, ClientError> {
        self.get_json("/users/get-users", &[]).await
    }
}
