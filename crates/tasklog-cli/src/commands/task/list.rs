use serde::Serialize;
use tasklog_client::{TaskActions, ViewMode};
use tasklog_core::entities::Task;

use crate::cli::subcommands::task::TaskListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_rows};
use crate::ui;

#[derive(Serialize)]
struct TaskListResponse<'a> {
    mode: &'static str,
    page: u32,
    page_size: u32,
    sort: String,
    tasks: Vec<TaskWithActions<'a>>,
}

#[derive(Serialize)]
struct TaskWithActions<'a> {
    #[serde(flatten)]
    task: &'a Task,
    actions: Vec<&'static str>,
}

fn action_names(actions: TaskActions) -> Vec<&'static str> {
    [
        (actions.complete, "complete"),
        (actions.approve, "approve"),
        (actions.edit, "edit"),
        (actions.delete, "delete"),
    ]
    .into_iter()
    .filter_map(|(allowed, name)| allowed.then_some(name))
    .collect()
}

pub async fn run(args: &TaskListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut query = ctx.task_query()?;
    super::filters::apply(&mut query, &args.filters);
    if let Some(page_size) = args.page_size {
        query.set_page_size(page_size);
    }
    query.set_page(args.page.saturating_sub(1));

    query.fetch(&ctx.client).await?;
    for field in &args.sort {
        query.toggle_sort(*field);
    }

    let sort = query.sort_key();
    let sort = format!("{} {}", sort.field, sort.direction.as_str());
    let mode = match query.mode() {
        ViewMode::Regular => "regular",
        ViewMode::Backdated => "backdated",
    };

    if flags.format == OutputFormat::Table {
        ui::note(&format!(
            "{mode} tasks, page {} ({} per page), sorted by {sort}",
            query.page() + 1,
            query.page_size()
        ));
        return output_rows(query.results(), flags.format);
    }

    let viewer = query.viewer();
    output(
        &TaskListResponse {
            mode,
            page: query.page() + 1,
            page_size: query.page_size(),
            sort,
            tasks: query
                .results()
                .iter()
                .map(|task| TaskWithActions {
                    task,
                    actions: action_names(TaskActions::for_task(task, viewer)),
                })
                .collect(),
        },
        flags.format,
    )
}
