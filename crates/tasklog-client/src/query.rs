//! The task list query engine.
//!
//! [`TaskQuery`] owns everything that drives the task list: view mode,
//! pending and applied filters, the sort key, pagination, and the last page
//! fetched. Editing pending filters or re-sorting never touches the network;
//! only [`TaskQuery::fetch`] and [`TaskQuery::download_report`] do, and each
//! issues exactly one request.

use std::path::{Path, PathBuf};

use tasklog_core::Session;
use tasklog_core::entities::Task;
use tasklog_core::enums::Role;

use crate::TasklogClient;
use crate::error::{ClientError, ValidationError};
use crate::filters::{FilterSet, TaskFilterRequest, ViewMode};
use crate::sort::{SortField, SortKey};

/// Fixed name of the saved spreadsheet report.
pub const REPORT_FILENAME: &str = "tasks.xlsx";

const LIST_PATH: &str = "/tasks";
const DOWNLOAD_PATH: &str = "/tasks/download";

/// Who is looking at the list. Decides what they may see and do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: i64,
    pub role: Role,
}

impl Viewer {
    #[must_use]
    pub const fn from_session(session: &Session) -> Self {
        Self {
            user_id: session.user.id,
            role: session.user.role,
        }
    }

    /// Pin restricted viewers to their own tasks.
    fn restrict(self, filters: &mut FilterSet) {
        if self.role.is_restricted() {
            filters.user_id = self.user_id.to_string();
        }
    }
}

/// A fully assembled list or download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub query: Vec<(&'static str, String)>,
    pub body: TaskFilterRequest,
}

pub struct TaskQuery {
    viewer: Viewer,
    timezone: String,
    mode: ViewMode,
    pending: FilterSet,
    applied: FilterSet,
    sort: SortKey,
    page: u32,
    page_size: u32,
    results: Vec<Task>,
}

impl TaskQuery {
    /// Regular mode, first page, newest first.
    #[must_use]
    pub fn new(viewer: Viewer, page_size: u32, timezone: impl Into<String>) -> Self {
        let mut query = Self {
            viewer,
            timezone: timezone.into(),
            mode: ViewMode::Regular,
            pending: FilterSet::default(),
            applied: FilterSet::default(),
            sort: SortKey::default(),
            page: 0,
            page_size: page_size.max(1),
            results: Vec::new(),
        };
        query.reset_filters();
        query
    }

    #[must_use]
    pub const fn viewer(&self) -> Viewer {
        self.viewer
    }

    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort
    }

    #[must_use]
    pub const fn pending(&self) -> &FilterSet {
        &self.pending
    }

    #[must_use]
    pub const fn applied(&self) -> &FilterSet {
        &self.applied
    }

    /// The last fetched page, in display order.
    #[must_use]
    pub fn results(&self) -> &[Task] {
        &self.results
    }

    /// Whether the user-selection control is offered at all.
    #[must_use]
    pub const fn can_select_user(&self) -> bool {
        self.viewer.role.can_select_user()
    }

    // ── Filters ──────────────────────────────────────────────────────

    /// Edit pending filters. Nothing is fetched until [`Self::apply_filters`].
    pub fn pending_mut(&mut self) -> &mut FilterSet {
        &mut self.pending
    }

    /// Confirm pending filters and go back to the first page.
    pub fn apply_filters(&mut self) {
        let mut filters = self.pending.clone();
        self.viewer.restrict(&mut filters);
        self.pending = filters.clone();
        self.applied = filters;
        self.page = 0;
    }

    /// Throw away pending edits.
    pub fn discard_pending(&mut self) {
        self.pending = self.applied.clone();
    }

    /// Switch between regular and backdated lists. Replaces all filters with
    /// the mode's defaults and returns to the first page.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.reset_filters();
    }

    fn reset_filters(&mut self) {
        let mut defaults = FilterSet::defaults_for(self.mode);
        self.viewer.restrict(&mut defaults);
        self.pending = defaults.clone();
        self.applied = defaults;
        self.page = 0;
    }

    // ── Sorting and paging ───────────────────────────────────────────

    /// Select a sort column and re-order the cached page in place.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = self.sort.toggled(field);
        self.sort.sort(&mut self.results);
    }

    pub const fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub const fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub const fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Change rows per page (minimum 1) and return to the first page.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// Assemble the list request from applied state. The backend counts
    /// pages from 1.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if an applied filter value is malformed.
    pub fn list_request(&self) -> Result<ListRequest, ValidationError> {
        let normalized = self.normalized_filters()?;
        let mut query = vec![
            ("page", self.page.saturating_add(1).to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(search) = normalized.search {
            query.push(("search", search));
        }
        Ok(ListRequest {
            query,
            body: normalized.body,
        })
    }

    /// Assemble the report request: same filters, no paging, plus the
    /// viewer's timezone.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if an applied filter value is malformed.
    pub fn download_request(&self) -> Result<ListRequest, ValidationError> {
        let normalized = self.normalized_filters()?;
        let mut query = vec![("timezone", self.timezone.clone())];
        if let Some(search) = normalized.search {
            query.push(("search", search));
        }
        Ok(ListRequest {
            query,
            body: normalized.body,
        })
    }

    fn normalized_filters(&self) -> Result<crate::filters::NormalizedFilters, ValidationError> {
        let mut filters = self.applied.clone();
        self.viewer.restrict(&mut filters);
        filters.normalize()
    }

    /// Fetch the current page and sort it by the active key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] without sending anything if a
    /// filter is malformed; otherwise whatever the gateway returns.
    pub async fn fetch(&mut self, client: &TasklogClient) -> Result<&[Task], ClientError> {
        let request = self.list_request()?;
        let mut tasks: Vec<Task> = client
            .post_json(LIST_PATH, &request.query, &request.body)
            .await?;
        tracing::debug!(count = tasks.len(), page = self.page, "task page fetched");
        self.sort.sort(&mut tasks);
        self.results = tasks;
        Ok(&self.results)
    }

    /// Download the filtered report and save it as `dest_dir/tasks.xlsx`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for malformed filters,
    /// [`ClientError::Io`] if the file cannot be written, or whatever the
    /// gateway returns.
    pub async fn download_report(
        &self,
        client: &TasklogClient,
        dest_dir: &Path,
    ) -> Result<PathBuf, ClientError> {
        let request = self.download_request()?;
        let bytes = client
            .post_bytes(DOWNLOAD_PATH, &request.query, &request.body)
            .await?;
        tokio::fs::create_dir_all(dest_dir).await?;
        let path = dest_dir.join(REPORT_FILENAME);
        tokio::fs::write(&path, &bytes).await?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "report saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn manager() -> Viewer {
        Viewer {
            user_id: 1,
            role: Role::Manager,
        }
    }

    fn employee() -> Viewer {
        Viewer {
            user_id: 42,
            role: Role::Employee,
        }
    }

    #[test]
    fn pending_edits_do_not_change_applied_until_confirmed() {
        let mut query = TaskQuery::new(manager(), 10, "UTC");
        query.pending_mut().status = "Done".into();
        assert!(query.applied().status.is_empty());
        assert!(query.list_request().unwrap().body.status.is_none());

        query.apply_filters();
        assert_eq!(query.applied().status, "Done");
        assert!(query.list_request().unwrap().body.status.is_some());
    }

    #[test]
    fn discard_restores_applied() {
        let mut query = TaskQuery::new(manager(), 10, "UTC");
        query.pending_mut().search = "deploy".into();
        query.discard_pending();
        assert_eq!(query.pending(), query.applied());
    }

    #[test]
    fn apply_resets_page() {
        let mut query = TaskQuery::new(manager(), 10, "UTC");
        query.next_page();
        query.next_page();
        query.apply_filters();
        assert_eq!(query.page(), 0);
    }

    #[test]
    fn switching_mode_resets_filters_and_page() {
        let mut query = TaskQuery::new(manager(), 10, "UTC");
        query.pending_mut().project_id = "3".into();
        query.apply_filters();
        query.set_page(4);

        query.set_mode(ViewMode::Backdated);
        assert_eq!(query.page(), 0);
        assert_eq!(query.applied(), &FilterSet::defaults_for(ViewMode::Backdated));
        assert_eq!(query.pending(), query.applied());

        query.set_page(2);
        query.set_mode(ViewMode::Regular);
        assert_eq!(query.page(), 0);
        assert_eq!(query.applied(), &FilterSet::defaults_for(ViewMode::Regular));
    }

    #[test]
    fn page_numbers_are_one_based_on_the_wire() {
        let mut query = TaskQuery::new(manager(), 25, "UTC");
        query.set_page(2);
        let request = query.list_request().unwrap();
        assert_eq!(
            request.query,
            vec![("page", "3".to_string()), ("page_size", "25".to_string())]
        );
    }

    #[test]
    fn previous_page_saturates() {
        let mut query = TaskQuery::new(manager(), 10, "UTC");
        query.previous_page();
        assert_eq!(query.page(), 0);
    }

    #[test]
    fn last_page_number_does_not_overflow() {
        let mut query = TaskQuery::new(manager(), 10, "UTC");
        query.set_page(u32::MAX);
        query.next_page();
        assert_eq!(query.page(), u32::MAX);

        let request = query.list_request().expect("valid");
        assert_eq!(request.query[0], ("page", u32::MAX.to_string()));
    }

    #[test]
    fn page_size_has_floor_of_one() {
        let mut query = TaskQuery::new(manager(), 0, "UTC");
        assert_eq!(query.page_size(), 1);
        query.set_page(3);
        query.set_page_size(0);
        assert_eq!(query.page_size(), 1);
        assert_eq!(query.page(), 0);
    }

    #[test]
    fn employee_is_pinned_to_own_tasks() {
        let mut query = TaskQuery::new(employee(), 10, "UTC");
        assert!(!query.can_select_user());
        assert_eq!(query.applied().user_id, "42");

        query.pending_mut().user_id = "7".into();
        query.apply_filters();
        assert_eq!(query.list_request().unwrap().body.user_id, Some(42));

        query.set_mode(ViewMode::Backdated);
        assert_eq!(query.list_request().unwrap().body.user_id, Some(42));
    }

    #[test]
    fn manager_may_filter_by_any_user() {
        let mut query = TaskQuery::new(manager(), 10, "UTC");
        assert!(query.can_select_user());
        assert!(query.list_request().unwrap().body.user_id.is_none());

        query.pending_mut().user_id = "7".into();
        query.apply_filters();
        assert_eq!(query.list_request().unwrap().body.user_id, Some(7));
    }

    #[test]
    fn download_request_carries_timezone_and_search() {
        let mut query = TaskQuery::new(manager(), 10, "Asia/Kolkata");
        query.pending_mut().search = "release".into();
        query.apply_filters();
        let request = query.download_request().unwrap();
        assert_eq!(
            request.query,
            vec![
                ("timezone", "Asia/Kolkata".to_string()),
                ("search", "release".to_string())
            ]
        );
        assert_eq!(request.body, query.list_request().unwrap().body);
    }

    #[test]
    fn toggle_sort_without_results_only_changes_key() {
        let mut query = TaskQuery::new(manager(), 10, "UTC");
        query.toggle_sort(SortField::Title);
        assert_eq!(query.sort_key(), SortKey::ascending(SortField::Title));
        assert!(query.results().is_empty());
    }
}
