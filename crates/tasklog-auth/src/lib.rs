//! # tasklog-auth
//!
//! Session handling for the tasklog client.
//!
//! Provides the [`SessionStore`] persistence seam (OS keychain with a `0600`
//! file fallback, file-only, and in-memory), the injected [`SessionContext`]
//! every request path reads from, and best-effort JWT expiry decoding for
//! status display.

pub mod context;
pub mod error;
pub mod expiry;
pub mod store;

pub use context::{Route, SessionContext};
pub use error::SessionError;
pub use store::{DurableSessionStore, FileSessionStore, MemorySessionStore, SessionStore};

use tasklog_config::SessionConfig;

/// Build the durable store described by `config`.
///
/// # Errors
///
/// Returns `SessionError::Store` if no session file location can be resolved.
pub fn store_from_config(config: &SessionConfig) -> Result<DurableSessionStore, SessionError> {
    let path = config.resolved_file_path().ok_or_else(|| {
        SessionError::Store("home directory not found; set session.file_path".into())
    })?;
    let keyring_service = config
        .use_keyring
        .then(|| config.keyring_service.clone());
    Ok(DurableSessionStore::new(keyring_service, path))
}
