//! Roles, task types, task statuses, and filter enums for tasklog.
//!
//! Every enum serializes to the exact string the backend uses (some contain
//! spaces, e.g. `"To Be Approved"`). `FromStr` is lenient about case and
//! separators so CLI input like `to-be-approved` or `customer_interaction`
//! resolves to the same variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Collapse case and separators so `"To Be Approved"`, `"to-be-approved"`
/// and `"TO_BE_APPROVED"` compare equal.
fn fold(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_variant<T: Copy>(
    raw: &str,
    kind: &'static str,
    variants: &[T],
    as_str: fn(T) -> &'static str,
) -> Result<T, CoreError> {
    let wanted = fold(raw);
    variants
        .iter()
        .copied()
        .find(|v| fold(as_str(*v)) == wanted)
        .ok_or_else(|| CoreError::UnknownVariant {
            kind,
            value: raw.to_string(),
            expected: variants
                .iter()
                .map(|v| as_str(*v))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Organisational role of a user. `Employee` is the lowest privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Employee,
    #[serde(rename = "TL")]
    TeamLead,
    Manager,
    Management,
}

impl Role {
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::Employee,
        Self::TeamLead,
        Self::Manager,
        Self::Management,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employee => "Employee",
            Self::TeamLead => "TL",
            Self::Manager => "Manager",
            Self::Management => "Management",
        }
    }

    /// Lowest-privilege users only ever see and create their own tasks.
    #[must_use]
    pub const fn is_restricted(self) -> bool {
        matches!(self, Self::Employee)
    }

    /// May filter the task list by any user.
    #[must_use]
    pub const fn can_select_user(self) -> bool {
        !self.is_restricted()
    }

    /// May approve backdated tasks.
    #[must_use]
    pub const fn can_approve(self) -> bool {
        !self.is_restricted()
    }

    /// May edit tasks owned by someone else.
    #[must_use]
    pub const fn can_edit_others(self) -> bool {
        !self.is_restricted()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if fold(s) == "teamlead" {
            return Ok(Self::TeamLead);
        }
        parse_variant(s, "role", &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// TaskType
// ---------------------------------------------------------------------------

/// Kind of work a task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskType {
    Development,
    Testing,
    Documentation,
    Review,
    Break,
    #[serde(rename = "Customer Interaction")]
    CustomerInteraction,
    #[serde(rename = "Internal Discussion")]
    InternalDiscussion,
    Deployment,
}

impl TaskType {
    pub const ALL: [Self; 8] = [
        Self::Development,
        Self::Testing,
        Self::Documentation,
        Self::Review,
        Self::Break,
        Self::CustomerInteraction,
        Self::InternalDiscussion,
        Self::Deployment,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Testing => "Testing",
            Self::Documentation => "Documentation",
            Self::Review => "Review",
            Self::Break => "Break",
            Self::CustomerInteraction => "Customer Interaction",
            Self::InternalDiscussion => "Internal Discussion",
            Self::Deployment => "Deployment",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, "task type", &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task. Transitions are decided by the server; the client only
/// uses the table below to decide which actions to offer.
///
/// ```text
/// In Progress ────────────────→ Done
/// To Be Approved → Approved
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "To Be Approved")]
    ToBeApproved,
    Approved,
    Done,
}

impl TaskStatus {
    pub const ALL: [Self; 4] = [
        Self::InProgress,
        Self::ToBeApproved,
        Self::Approved,
        Self::Done,
    ];

    /// Initial status for a newly submitted task.
    #[must_use]
    pub const fn initial(backdated: bool) -> Self {
        if backdated {
            Self::ToBeApproved
        } else {
            Self::InProgress
        }
    }

    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::InProgress => &[Self::Done],
            Self::ToBeApproved => &[Self::Approved],
            Self::Approved | Self::Done => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::ToBeApproved => "To Be Approved",
            Self::Approved => "Approved",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, "status", &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// CreatorType
// ---------------------------------------------------------------------------

/// Backdated-list filter on who entered the task.
///
/// `Own` keeps tasks a user logged for themselves, `Manager` keeps tasks a
/// manager logged on someone's behalf. `Any` is sent as an absent filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatorType {
    #[default]
    Any,
    Own,
    Manager,
}

impl CreatorType {
    pub const ALL: [Self; 3] = [Self::Any, Self::Own, Self::Manager];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Own => "own",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for CreatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreatorType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::Any);
        }
        parse_variant(s, "creator type", &Self::ALL, Self::as_str)
    }
}
