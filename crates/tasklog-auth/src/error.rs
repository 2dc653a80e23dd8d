use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not logged in; run `tlg auth login`")]
    NotAuthenticated,

    #[error("session store error: {0}")]
    Store(String),

    #[error("stored session is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("token decode failed: {0}")]
    TokenDecode(String),
}
