mod download;
mod filters;
mod form;
mod list;
mod transition;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `tlg task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::List(args) => list::run(args, ctx, flags).await,
        TaskCommands::Create(args) => form::create(&args.form, ctx, flags).await,
        TaskCommands::Edit(args) => form::edit(args.id, &args.form, ctx, flags).await,
        TaskCommands::Complete { id, end } => transition::complete(*id, *end, ctx, flags).await,
        TaskCommands::Approve { id } => transition::approve(*id, ctx, flags).await,
        TaskCommands::Delete { id } => transition::delete(*id, ctx, flags).await,
        TaskCommands::Download(args) => download::run(args, ctx, flags).await,
    }
}
