use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: i64,
    name: String,
    role: String,
    expires_at: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => read_password()?,
    };

    let session = ctx.client.login(&args.username, &password).await?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: session.user.id,
            name: session.user.name,
            role: session.user.role.to_string(),
            expires_at: tasklog_auth::expiry::decode_expiry(&session.token)
                .ok()
                .map(|at| at.to_rfc3339()),
        },
        flags.format,
    )
}

/// Read the password from stdin. On a terminal the prompt reads keys in raw
/// mode so nothing is echoed; piped input is read as one line.
fn read_password() -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return prompt_hidden("Password: ");
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

enum KeyOutcome {
    Continue,
    Submit,
    Cancel,
}

/// Restores cooked mode on every exit path.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("failed to disable terminal echo")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = terminal::disable_raw_mode() {
            tracing::warn!(%error, "failed to restore terminal mode");
        }
    }
}

fn prompt_hidden(prompt: &str) -> anyhow::Result<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush().ok();

    let mut password = String::new();
    let outcome = {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read().context("failed to read key")? {
                match apply_key(&mut password, key) {
                    KeyOutcome::Continue => {}
                    done => break done,
                }
            }
        }
    };
    writeln!(stderr)?;

    match outcome {
        KeyOutcome::Cancel => anyhow::bail!("login cancelled"),
        _ => Ok(password),
    }
}

fn apply_key(password: &mut String, key: KeyEvent) -> KeyOutcome {
    if key.kind == KeyEventKind::Release {
        return KeyOutcome::Continue;
    }
    match key.code {
        KeyCode::Enter => KeyOutcome::Submit,
        KeyCode::Esc => KeyOutcome::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyOutcome::Cancel,
        KeyCode::Char(ch) => {
            password.push(ch);
            KeyOutcome::Continue
        }
        KeyCode::Backspace => {
            password.pop();
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}
