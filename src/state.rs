use std::sync::Arc;

use actix_web::web;
use sqlx::SqlitePool;

use crate::{
    auth::{AuthService, SessionVerifier},
    config::{AuthConfig, Config},
    db,
    store::{TaskStore, UserStore},
};

/// Everything the HTTP layer needs, built once per process.
///
/// Cloning is cheap: the stores share one pool and the rest is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub tasks: web::Data<TaskStore>,
    pub auth: web::Data<AuthService>,
    pub verifier: Arc<SessionVerifier>,
}

impl AppState {
    /// Opens the configured database and wires the services on top of it.
    pub async fn build(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = db::connect(&config.database_url).await?;
        Ok(Self::from_pool(pool, &config.auth))
    }

    pub fn from_pool(pool: SqlitePool, auth: &AuthConfig) -> Self {
        let users = UserStore::new(pool.clone(), auth.bcrypt_cost);

        Self {
            tasks: web::Data::new(TaskStore::new(pool)),
            auth: web::Data::new(AuthService::new(users, auth)),
            verifier: Arc::new(SessionVerifier::new(auth)),
        }
    }
}
