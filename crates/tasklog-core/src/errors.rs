//! Cross-cutting error types for tasklog.
//!
//! Transport and session errors live in their own crates; a unified error is
//! deferred to `tasklog-cli` where everything converges on `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any tasklog crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not match any variant of a wire enum.
    #[error("invalid {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
