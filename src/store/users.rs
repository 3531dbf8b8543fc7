use sqlx::SqlitePool;

use crate::{
    auth::password::{hash_password_blocking, verify_password_blocking},
    error::AppError,
    models::User,
};

/// Username + password hash records.
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: SqlitePool,
    bcrypt_cost: u32,
}

impl UserStore {
    pub fn new(pool: SqlitePool, bcrypt_cost: u32) -> Self {
        Self { pool, bcrypt_cost }
    }

    /// Hashes `password` and stores a new user.
    ///
    /// Fails with `AppError::Conflict` when the username is taken. The unique index on
    /// `username` catches registrations racing past the existence check.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if self.find_by_username(username).await?.is_some() {
            return Err(username_taken());
        }

        let password_hash = hash_password_blocking(password.to_owned(), self.bcrypt_cost).await?;

        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash) VALUES (?, ?)
             RETURNING id, username, password_hash",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict(_) => username_taken(),
            other => other,
        })
    }

    /// Checks a username/password pair.
    ///
    /// `NotFound` for an unknown username, `Unauthorized` for a wrong password.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))?;

        if verify_password_blocking(password.to_owned(), user.password_hash.clone()).await? {
            Ok(user)
        } else {
            Err(AppError::Unauthorized("Invalid credentials".into()))
        }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

fn username_taken() -> AppError {
    AppError::Conflict("Username already taken".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn store() -> UserStore {
        UserStore::new(db::connect_in_memory().await.unwrap(), 4)
    }

    #[actix_rt::test]
    async fn test_register_stores_hash_not_password() {
        let store = store().await;
        let user = store.register("alice", "pw1").await.unwrap();

        assert_eq!(user.username, "alice");
        assert!(user.id > 0);
        assert_ne!(user.password_hash, "pw1");
        assert!(user.password_hash.starts_with("$2"));
    }

    #[actix_rt::test]
    async fn test_duplicate_username_is_conflict() {
        let store = store().await;
        store.register("alice", "pw1").await.unwrap();

        match store.register("alice", "pw2").await {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, "Username already taken"),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[actix_rt::test]
    async fn test_authenticate() {
        let store = store().await;
        let registered = store.register("alice", "pw1").await.unwrap();

        let user = store.authenticate("alice", "pw1").await.unwrap();
        assert_eq!(user.id, registered.id);

        assert!(matches!(
            store.authenticate("alice", "wrong").await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            store.authenticate("bob", "pw1").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_rt::test]
    async fn test_find_by_username() {
        let store = store().await;
        assert!(store.find_by_username("alice").await.unwrap().is_none());

        store.register("alice", "pw1").await.unwrap();
        let found = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.username, "alice");
    }
}
