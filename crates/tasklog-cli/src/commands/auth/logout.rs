use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let had_session = ctx.client.session().get_session().is_some();
    ctx.client.logout();
    output(&AuthLogoutResponse { cleared: had_session }, flags.format)
}
