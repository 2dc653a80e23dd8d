use clap::Subcommand;
use tasklog_core::enums::Role;

#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Full user directory.
    List {
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Users you may filter the task list by.
    Visible,
}
