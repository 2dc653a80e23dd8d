use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `tlg project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List => {
            let projects = ctx.client.list_projects().await?;
            output_rows(&projects, flags.format)
        }
    }
}
