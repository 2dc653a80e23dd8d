//! Entity structs mirroring the backend's JSON responses.

mod project;
mod task;
mod user;

pub use project::Project;
pub use task::Task;
pub use user::{User, VisibleUser};
