//! Task list filter state and its wire form.
//!
//! A [`FilterSet`] holds raw form values (strings, as typed). Before anything
//! is sent it is normalized into a [`TaskFilterRequest`]: blank values become
//! absent fields, since the backend treats `""` differently from "not set".

use chrono::NaiveDate;
use serde::Serialize;
use tasklog_core::enums::{CreatorType, TaskStatus, TaskType};

use crate::error::{FormField, ValidationError};

/// Regular tasks vs. the backdated approval queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Regular,
    Backdated,
}

/// Editable filter values. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub task_type: String,
    pub status: String,
    pub project_id: String,
    pub user_id: String,
    pub created_by: String,
    /// `YYYY-MM-DD`
    pub from_date: String,
    /// `YYYY-MM-DD`
    pub to_date: String,
    pub only_backdated: bool,
    pub show_all_backdated: bool,
    /// `own`, `manager`, or empty for any.
    pub creator_type: String,
    pub search: String,
}

impl FilterSet {
    /// Starting filters for a view mode.
    #[must_use]
    pub fn defaults_for(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Regular => Self::default(),
            ViewMode::Backdated => Self {
                only_backdated: true,
                show_all_backdated: false,
                ..Self::default()
            },
        }
    }

    /// Convert to the transmitted form. Blank values are dropped; malformed
    /// ones are flagged rather than sent.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming every field that is non-blank but
    /// cannot be parsed.
    pub fn normalize(&self) -> Result<NormalizedFilters, ValidationError> {
        let mut invalid = Vec::new();

        let body = TaskFilterRequest {
            task_type: parse_field(&self.task_type, FormField::TaskType, &mut invalid),
            status: parse_field(&self.status, FormField::Status, &mut invalid),
            project_id: parse_field(&self.project_id, FormField::ProjectId, &mut invalid),
            user_id: parse_field(&self.user_id, FormField::UserId, &mut invalid),
            created_by: parse_field(&self.created_by, FormField::CreatedBy, &mut invalid),
            from_date: parse_field(&self.from_date, FormField::FromDate, &mut invalid),
            to_date: parse_field(&self.to_date, FormField::ToDate, &mut invalid),
            only_backdated: self.only_backdated,
            show_all_backdated: self.show_all_backdated,
            filter_backdated_by_creator_type: parse_field::<CreatorType>(
                &self.creator_type,
                FormField::CreatorType,
                &mut invalid,
            )
            .filter(|c| *c != CreatorType::Any),
        };

        if let (Some(from), Some(to)) = (body.from_date, body.to_date)
            && from > to
        {
            invalid.push(FormField::ToDate);
        }

        ValidationError::check(invalid)?;
        Ok(NormalizedFilters {
            body,
            search: non_blank(&self.search).map(str::to_string),
        })
    }
}

/// `None` for blank input, so callers never see `""`.
fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    field: FormField,
    invalid: &mut Vec<FormField>,
) -> Option<T> {
    let value = non_blank(raw)?;
    value.parse().ok().or_else(|| {
        invalid.push(field);
        None
    })
}

/// JSON body for the list and download endpoints. Absent filters are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskFilterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    pub only_backdated: bool,
    pub show_all_backdated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_backdated_by_creator_type: Option<CreatorType>,
}

/// Normalized filters: the JSON body plus the free-text search, which
/// travels as a query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFilters {
    pub body: TaskFilterRequest,
    pub search: Option<String>,
}
