use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects.
    List,
}
