use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tasklog_core::Session;

use crate::error::SessionError;

const KEYRING_USER: &str = "session";

/// Persistence for the login session (token + user profile).
///
/// Implementations must treat "nothing stored" and "unreadable" alike:
/// `load` returns `None` and the user logs in again.
pub trait SessionStore: Send + Sync {
    /// Persist `session`, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if the session cannot be written anywhere.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Load the stored session, if any.
    fn load(&self) -> Option<Session>;

    /// Remove any stored session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if stored data exists but cannot be removed.
    fn clear(&self) -> Result<(), SessionError>;
}

// --- Durable: keychain, falling back to file ---

/// OS keychain store with a `0600` JSON file fallback.
///
/// Load priority: keychain → file. `clear` removes both.
pub struct DurableSessionStore {
    keyring_service: Option<String>,
    file: FileSessionStore,
}

impl DurableSessionStore {
    /// `keyring_service = None` skips the keychain entirely.
    #[must_use]
    pub fn new(keyring_service: Option<String>, file_path: PathBuf) -> Self {
        Self {
            keyring_service,
            file: FileSessionStore::new(file_path),
        }
    }

    fn entry(&self) -> Option<keyring::Entry> {
        let service = self.keyring_service.as_deref()?;
        match keyring::Entry::new(service, KEYRING_USER) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    /// Which tier currently holds the session (for status display).
    #[must_use]
    pub fn detect_source(&self) -> Option<&'static str> {
        if self
            .entry()
            .is_some_and(|e| e.get_password().is_ok_and(|s| !s.trim().is_empty()))
        {
            return Some("keyring");
        }
        self.file.load().map(|_| "file")
    }
}

impl SessionStore for DurableSessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let Some(entry) = self.entry() else {
            return self.file.save(session);
        };
        let json = serde_json::to_string(session)?;
        match entry.set_password(&json) {
            Ok(()) => {
                // A stale file copy would outlive a later keychain clear.
                if let Err(error) = self.file.clear() {
                    tracing::warn!(%error, "failed to remove stale session file");
                }
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                self.file.save(session)
            }
        }
    }

    fn load(&self) -> Option<Session> {
        if let Some(entry) = self.entry()
            && let Ok(json) = entry.get_password()
            && !json.trim().is_empty()
        {
            match serde_json::from_str(&json) {
                Ok(session) => return Some(session),
                Err(error) => tracing::warn!(%error, "ignoring corrupt keyring session"),
            }
        }
        self.file.load()
    }

    fn clear(&self) -> Result<(), SessionError> {
        let keyring = self
            .entry()
            .map_or(Ok(()), |entry| keyring_cleared(entry.delete_credential()));
        self.file.clear()?;
        keyring
    }
}

/// A missing entry is already cleared; any other failure leaves a token behind.
fn keyring_cleared(result: keyring::Result<()>) -> Result<(), SessionError> {
    match result {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(error) => Err(SessionError::Store(format!(
            "failed to remove keyring session: {error}"
        ))),
    }
}

// --- File ---

/// Session stored as JSON in a single file, `0600` on Unix.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let json = serde_json::to_string_pretty(session)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| SessionError::Store(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.path, json)
            .map_err(|e| SessionError::Store(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                SessionError::Store(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    fn load(&self) -> Option<Session> {
        let content = fs::read_to_string(&self.path)
            .ok()
            .filter(|s| !s.trim().is_empty())?;
        serde_json::from_str(&content)
            .inspect_err(|error| {
                tracing::warn!(%error, path = %self.path.display(), "ignoring corrupt session file");
            })
            .ok()
    }

    fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                SessionError::Store(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}

// --- Memory ---

/// Ephemeral store; nothing survives the process.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Option<Session> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklog_core::UserProfile;
    use tasklog_core::enums::Role;

    fn session() -> Session {
        Session {
            token: "header.payload.sig".into(),
            user: UserProfile {
                id: 3,
                name: "Ravi".into(),
                username: "ravi".into(),
                role: Role::Employee,
            },
        }
    }

    #[test]
    fn file_store_save_load_clear_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path().join("nested").join("session.json"));

        assert!(store.load().is_none());
        store.save(&session()).expect("save");
        assert_eq!(store.load(), Some(session()));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(store.path())
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        store.clear().expect("clear");
        assert!(!store.path().exists());
        assert!(store.load().is_none());
    }

    #[test]
    fn file_store_clear_without_file_is_ok() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path().join("session.json"));
        assert!(store.clear().is_ok());
    }

    #[test]
    fn file_store_ignores_blank_and_corrupt_content() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        let store = FileSessionStore::new(path.clone());

        std::fs::write(&path, "   \n  ").expect("write");
        assert!(store.load().is_none(), "whitespace-only should read as empty");

        std::fs::write(&path, "{not json").expect("write");
        assert!(store.load().is_none(), "corrupt content should read as empty");
    }

    #[test]
    fn durable_store_without_keyring_uses_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = DurableSessionStore::new(None, tmp.path().join("session.json"));

        store.save(&session()).expect("save");
        assert_eq!(store.load(), Some(session()));
        assert_eq!(store.detect_source(), Some("file"));

        store.clear().expect("clear");
        assert!(store.load().is_none());
        assert_eq!(store.detect_source(), None);
    }

    #[test]
    fn keyring_clear_treats_missing_entry_as_cleared() {
        assert!(keyring_cleared(Ok(())).is_ok());
        assert!(keyring_cleared(Err(keyring::Error::NoEntry)).is_ok());
    }

    #[test]
    fn keyring_clear_reports_other_failures() {
        let failure = keyring::Error::Invalid("service".into(), "locked".into());
        let err = keyring_cleared(Err(failure)).expect_err("should fail");
        assert!(matches!(err, SessionError::Store(message) if message.contains("keyring")));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySessionStore::new();
        store.save(&session()).expect("save");
        assert_eq!(store.load().map(|s| s.token), Some("header.payload.sig".into()));
        store.clear().expect("clear");
        assert!(store.load().is_none());
    }
}
