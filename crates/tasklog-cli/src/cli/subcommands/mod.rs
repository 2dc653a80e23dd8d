pub mod auth;
pub mod project;
pub mod task;
pub mod user;

pub use auth::AuthCommands;
pub use project::ProjectCommands;
pub use task::TaskCommands;
pub use user::UserCommands;
