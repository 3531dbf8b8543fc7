#![doc = "The `taskgate` library crate."]
#![doc = ""]
#![doc = "A task-list REST API: password registration and login, short-lived signed session"]
#![doc = "tokens, and token-gated CRUD over a single SQLite `tasks` table. The binary"]
#![doc = "(`main.rs`) reads the configuration, builds an `AppState` and serves `routes::config`"]
#![doc = "behind `auth::AuthMiddleware`."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use crate::error::AppError;
pub use crate::state::AppState;
