//! SQLite-backed persistence for tasks and user credentials.

pub mod tasks;
pub mod users;

pub use tasks::TaskStore;
pub use users::UserStore;
