use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with username and password.
    Login(AuthLoginArgs),
    /// Clear the stored session.
    Logout,
    /// Show the stored session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long, short = 'u')]
    pub username: String,
    /// Read from stdin when omitted.
    #[arg(long, env = "TASKLOG_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
