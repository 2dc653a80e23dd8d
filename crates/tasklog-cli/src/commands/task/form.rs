use tasklog_client::TaskForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::task::TaskFormArgs;
use crate::context::AppContext;
use crate::output::output;

fn to_form(args: &TaskFormArgs) -> TaskForm {
    TaskForm {
        project_id: args.project,
        title: args.title.clone().unwrap_or_default(),
        details: args.details.clone().unwrap_or_default(),
        task_type: args.task_type,
        start_time: args.start,
        end_time: args.end,
        reviewer_id: args.reviewer,
        user_id: args.user,
        backdated: args.backdated,
        date: args.date,
    }
}

pub async fn create(args: &TaskFormArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = ctx.client.create_task(&to_form(args)).await?;
    output(&task, flags.format)
}

pub async fn edit(
    id: i64,
    args: &TaskFormArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = ctx.client.edit_task(id, &to_form(args)).await?;
    output(&task, flags.format)
}
