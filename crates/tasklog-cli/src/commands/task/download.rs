use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::task::TaskDownloadArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct TaskDownloadResponse {
    path: String,
    bytes: u64,
}

pub async fn run(
    args: &TaskDownloadArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut query = ctx.task_query()?;
    super::filters::apply(&mut query, &args.filters);

    let dest = args
        .dir
        .clone()
        .unwrap_or_else(|| ctx.config.general.report_dir.clone());
    let path = query.download_report(&ctx.client, &dest).await?;
    let bytes = tokio::fs::metadata(&path).await.map_or(0, |meta| meta.len());

    output(
        &TaskDownloadResponse {
            path: path.display().to_string(),
            bytes,
        },
        flags.format,
    )
}
