//! Client error types.
//!
//! Four families, each scoped to the action that raised it:
//! authentication failure (handled globally by the gateway), local
//! validation failure (no request sent), server rejection (detail shown
//! verbatim), and transport or unclassified failure (generic message).

use std::fmt;

use tasklog_auth::SessionError;
use thiserror::Error;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// A form or filter field that failed local validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ProjectId,
    Title,
    TaskType,
    StartTime,
    EndTime,
    UserId,
    Status,
    CreatedBy,
    FromDate,
    ToDate,
    CreatorType,
}

impl FormField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProjectId => "project_id",
            Self::Title => "title",
            Self::TaskType => "task_type",
            Self::StartTime => "start_time",
            Self::EndTime => "end_time",
            Self::UserId => "user_id",
            Self::Status => "status",
            Self::CreatedBy => "created_by",
            Self::FromDate => "from_date",
            Self::ToDate => "to_date",
            Self::CreatorType => "creator_type",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields the view layer should flag. Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or missing fields: {}", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<FormField>,
}

impl ValidationError {
    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.fields.contains(&field)
    }

    /// `Ok(())` when nothing was flagged.
    pub(crate) fn check(fields: Vec<FormField>) -> Result<(), Self> {
        if fields.is_empty() {
            Ok(())
        } else {
            Err(Self { fields })
        }
    }
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered 401. The gateway has already cleared the session.
    #[error("unauthorized{}", detail_suffix(.detail.as_deref()))]
    Unauthorized { detail: Option<String> },

    /// Local validation failed; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server refused the request.
    #[error("server rejected request ({status}){}", detail_suffix(.detail.as_deref()))]
    Rejected { status: u16, detail: Option<String> },

    /// Credentials were not accepted; `message` is ready to show.
    #[error("login failed: {message}")]
    LoginFailed { message: String },

    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|d| format!(": {d}")).unwrap_or_default()
}

impl ClientError {
    /// Text to show the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => SESSION_EXPIRED.to_string(),
            Self::Validation(err) => format!("Please fill in: {}", join_fields(&err.fields)),
            Self::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::LoginFailed { message } => message.clone(),
            Self::Session(err) => err.to_string(),
            Self::Rejected { detail: None, .. }
            | Self::Network(_)
            | Self::Decode(_)
            | Self::Io(_) => GENERIC_FAILURE.to_string(),
        }
    }

    /// Server-supplied detail message, when the server sent one.
    #[must_use]
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
