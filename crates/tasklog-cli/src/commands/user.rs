use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `tlg user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::List { role, active } => {
            let users = ctx.client.list_users(*role, *active).await?;
            output_rows(&users, flags.format)
        }
        UserCommands::Visible => {
            let users = ctx.client.visible_users().await?;
            output_rows(&users, flags.format)
        }
    }
}
