//! # tasklog-client
//!
//! REST client for the task-tracking backend.
//!
//! - [`TasklogClient`] is the authenticated gateway: bearer token on every
//!   call, session cleared and routed to login on 401.
//! - Login and logout (`auth`).
//! - [`TaskQuery`], the task list engine: filters, view modes, client-side
//!   sorting, pagination, report download.
//! - Task creation and editing with local validation ([`TaskForm`]).
//! - Status transitions, deletion, and reference lists (projects, users).

mod auth;
mod error;
pub mod filters;
mod gateway;
mod http;
pub mod mutation;
pub mod query;
mod reference;
pub mod sort;
pub mod transitions;

pub use error::{ClientError, FormField, ValidationError};
pub use filters::{FilterSet, TaskFilterRequest, ViewMode};
pub use gateway::TasklogClient;
pub use mutation::{TaskForm, TaskPayload};
pub use query::{REPORT_FILENAME, TaskQuery, Viewer};
pub use sort::{SortDirection, SortField, SortKey};
pub use transitions::TaskActions;
