use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, ProjectCommands, TaskCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, and inspect the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Tasks: list, log, edit, complete, approve, delete, export.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// User directory.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
