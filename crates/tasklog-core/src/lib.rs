//! # tasklog-core
//!
//! Core types shared across all tasklog crates:
//! - Entity structs mirroring the task-tracking backend's JSON (tasks, projects, users)
//! - Wire enums (roles, task types, task statuses) with their exact backend spellings
//! - The authenticated session model (token + user profile)
//! - Timestamp serde helpers tolerant of naive backend datetimes
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod session;
pub mod timestamp;

pub use errors::CoreError;
pub use session::{Session, UserProfile};
