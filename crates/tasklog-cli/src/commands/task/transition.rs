use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct TaskDeleteResponse {
    id: i64,
    deleted: bool,
}

pub async fn complete(
    id: i64,
    end: Option<DateTime<FixedOffset>>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let end = end.map(|end| end.with_timezone(&Utc));
    let task = ctx.client.complete_task(id, end).await?;
    output(&task, flags.format)
}

pub async fn approve(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = ctx.client.approve_task(id).await?;
    output(&task, flags.format)
}

pub async fn delete(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.client.delete_task(id).await?;
    output(&TaskDeleteResponse { id, deleted: true }, flags.format)
}
