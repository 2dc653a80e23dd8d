use chrono::{DateTime, Local, Utc};
use tasklog_core::entities::{Project, Task, User, VisibleUser};

/// Fixed table columns for list output.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

fn local_time(value: DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("-"), |v| v.to_string())
}

impl Tabular for Task {
    const HEADERS: &'static [&'static str] = &[
        "id", "date", "project", "owner", "title", "type", "status", "start", "end", "minutes",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            or_dash(self.date),
            self.project_id.to_string(),
            self.user_id.to_string(),
            self.title.clone(),
            self.task_type.to_string(),
            or_dash(self.status),
            local_time(self.start_time),
            or_dash(self.end_time.map(local_time)),
            or_dash(self.total_time_minutes.map(|m| format!("{m:.0}"))),
        ]
    }
}

impl Tabular for Project {
    const HEADERS: &'static [&'static str] = &["id", "code", "name", "active"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            or_dash(self.project_code.as_deref()),
            self.project_name.clone(),
            self.is_active.to_string(),
        ]
    }
}

impl Tabular for User {
    const HEADERS: &'static [&'static str] = &[
        "id", "name", "username", "role", "emp_code", "department", "manager", "active",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.username.clone(),
            self.role.to_string(),
            or_dash(self.emp_code.as_deref()),
            or_dash(self.department.as_deref()),
            or_dash(self.reporting_manager),
            self.is_active.to_string(),
        ]
    }
}

impl Tabular for VisibleUser {
    const HEADERS: &'static [&'static str] = &["id", "name", "role"];

    fn row(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.role.to_string()]
    }
}
