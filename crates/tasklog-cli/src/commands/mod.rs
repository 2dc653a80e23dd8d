pub mod auth;
pub mod dispatch;
pub mod project;
pub mod shared;
pub mod task;
pub mod user;
