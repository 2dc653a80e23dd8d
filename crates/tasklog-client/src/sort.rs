//! Client-side ordering of an already-fetched page.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tasklog_core::CoreError;
use tasklog_core::entities::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Title,
    Project,
    User,
    CreatedBy,
    TaskType,
    Status,
    Date,
    StartTime,
    EndTime,
    TotalTime,
}

impl SortField {
    pub const ALL: [Self; 11] = [
        Self::Id,
        Self::Title,
        Self::Project,
        Self::User,
        Self::CreatedBy,
        Self::TaskType,
        Self::Status,
        Self::Date,
        Self::StartTime,
        Self::EndTime,
        Self::TotalTime,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Project => "project",
            Self::User => "user",
            Self::CreatedBy => "created_by",
            Self::TaskType => "task_type",
            Self::Status => "status",
            Self::Date => "date",
            Self::StartTime => "start_time",
            Self::EndTime => "end_time",
            Self::TotalTime => "total_time",
        }
    }

    /// Compare two tasks by this field alone, ascending.
    /// Missing values order before present ones.
    #[must_use]
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Title => a.title.cmp(&b.title),
            Self::Project => a.project_id.cmp(&b.project_id),
            Self::User => a.user_id.cmp(&b.user_id),
            Self::CreatedBy => a.created_by.cmp(&b.created_by),
            Self::TaskType => a.task_type.as_str().cmp(b.task_type.as_str()),
            Self::Status => a
                .status
                .map(|s| s.as_str())
                .cmp(&b.status.map(|s| s.as_str())),
            Self::Date => a.date.cmp(&b.date),
            Self::StartTime => a.start_time.cmp(&b.start_time),
            Self::EndTime => a.end_time.cmp(&b.end_time),
            Self::TotalTime => match (a.total_time_minutes, b.total_time_minutes) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "sort field",
                value: s.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// The single active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortKey {
    /// Newest first, matching the server's own ordering.
    fn default() -> Self {
        Self {
            field: SortField::StartTime,
            direction: SortDirection::Descending,
        }
    }
}

impl SortKey {
    #[must_use]
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Reselecting the active field flips direction; any other field
    /// starts ascending.
    #[must_use]
    pub fn toggled(self, field: SortField) -> Self {
        if field == self.field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self::ascending(field)
        }
    }

    /// Ties compare `Equal`; combined with a stable sort they keep their
    /// current relative order.
    #[must_use]
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn sort(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}
