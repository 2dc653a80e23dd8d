use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::{Args, Subcommand};
use tasklog_client::SortField;
use tasklog_core::enums::TaskType;

use crate::commands::shared::parse::parse_timestamp;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List one page of tasks.
    List(TaskListArgs),
    /// Log a new task.
    Create(TaskCreateArgs),
    /// Replace a task's fields.
    Edit(TaskEditArgs),
    /// Mark an in-progress task done.
    Complete {
        id: i64,
        /// Defaults to the server's current time.
        #[arg(long, value_parser = parse_timestamp)]
        end: Option<DateTime<FixedOffset>>,
    },
    /// Approve a backdated task.
    Approve { id: i64 },
    /// Delete a task.
    Delete { id: i64 },
    /// Export the filtered list as a spreadsheet.
    Download(TaskDownloadArgs),
}

/// Filters shared by `list` and `download`. Blank values are ignored.
#[derive(Clone, Debug, Default, Args)]
pub struct FilterArgs {
    /// Show the backdated approval queue instead of regular tasks.
    #[arg(long)]
    pub backdated: bool,
    /// With --backdated, include already approved entries.
    #[arg(long, requires = "backdated")]
    pub all_backdated: bool,
    /// With --backdated: own, manager, or any.
    #[arg(long, requires = "backdated")]
    pub creator: Option<String>,
    #[arg(long)]
    pub project: Option<String>,
    #[arg(long)]
    pub user: Option<String>,
    #[arg(long)]
    pub created_by: Option<String>,
    #[arg(long = "type")]
    pub task_type: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub from: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TaskListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
    /// 1-based page number.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,
    /// Sort column. Repeat the same column to flip direction.
    #[arg(long)]
    pub sort: Vec<SortField>,
}

#[derive(Clone, Debug, Args)]
pub struct TaskDownloadArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
    /// Directory to save the report in (defaults to general.report_dir).
    #[arg(long)]
    pub dir: Option<std::path::PathBuf>,
}

/// Task form fields. Timestamps take RFC 3339 or local `YYYY-MM-DD HH:MM`.
#[derive(Clone, Debug, Args)]
pub struct TaskFormArgs {
    #[arg(long)]
    pub project: Option<i64>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub details: Option<String>,
    #[arg(long = "type")]
    pub task_type: Option<TaskType>,
    #[arg(long, value_parser = parse_timestamp)]
    pub start: Option<DateTime<FixedOffset>>,
    #[arg(long, value_parser = parse_timestamp)]
    pub end: Option<DateTime<FixedOffset>>,
    #[arg(long)]
    pub reviewer: Option<i64>,
    /// Task owner (privileged roles only).
    #[arg(long)]
    pub user: Option<i64>,
    /// Log work done on an earlier day; needs approval.
    #[arg(long)]
    pub backdated: bool,
    /// Work date; defaults to the start date.
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Clone, Debug, Args)]
pub struct TaskCreateArgs {
    #[command(flatten)]
    pub form: TaskFormArgs,
}

#[derive(Clone, Debug, Args)]
pub struct TaskEditArgs {
    pub id: i64,
    #[command(flatten)]
    pub form: TaskFormArgs,
}
