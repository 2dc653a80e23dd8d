use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<i64>,
    name: Option<String>,
    username: Option<String>,
    role: Option<String>,
    expires_at: Option<String>,
    session_source: Option<String>,
    api_url: String,
    note: Option<String>,
}

/// Report the stored session. Only the server can confirm a token is still
/// valid; an expiry in the past is shown as a note.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let api_url = ctx.client.base_url().to_string();

    let status = match ctx.client.session().get_session() {
        Some(session) => {
            let expires_at = tasklog_auth::expiry::decode_expiry(&session.token).ok();
            let note = tasklog_auth::expiry::looks_expired(&session.token)
                .then(|| String::from("token appears expired; run `tlg auth login`"));
            AuthStatusResponse {
                authenticated: true,
                user_id: Some(session.user.id),
                name: Some(session.user.name),
                username: Some(session.user.username),
                role: Some(session.user.role.to_string()),
                expires_at: expires_at.map(|at| at.to_rfc3339()),
                session_source: ctx.session_source.map(str::to_string),
                api_url,
                note,
            }
        }
        None => AuthStatusResponse {
            authenticated: false,
            user_id: None,
            name: None,
            username: None,
            role: None,
            expires_at: None,
            session_source: None,
            api_url,
            note: Some("not logged in".into()),
        },
    };

    output(&status, flags.format)
}
