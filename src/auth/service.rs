use crate::{
    auth::token::TokenSigner,
    config::AuthConfig,
    error::AppError,
    models::UserProfile,
    store::UserStore,
};

/// Registration and login on top of the credential store.
#[derive(Clone)]
pub struct AuthService {
    users: UserStore,
    signer: TokenSigner,
}

impl AuthService {
    pub fn new(users: UserStore, config: &AuthConfig) -> Self {
        Self {
            users,
            signer: TokenSigner::new(config),
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<UserProfile, AppError> {
        let user = self.users.register(username, password).await?;
        log::info!("Registered user {} (id {})", user.username, user.id);
        Ok(user.into())
    }

    /// Verifies the credentials and returns a freshly signed session token.
    ///
    /// Unknown usernames and wrong passwords produce the same `Unauthorized` error.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = match self.users.authenticate(username, password).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) | Err(AppError::Unauthorized(_)) => {
                log::warn!("Failed login attempt for {}", username);
                return Err(AppError::Unauthorized("Invalid credentials".into()));
            }
            Err(e) => return Err(e),
        };

        let token = self.signer.mint(&user.username)?;
        log::info!("Issued session token for {}", user.username);
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{auth::token::SessionVerifier, db};

    async fn service(config: &AuthConfig) -> AuthService {
        let pool = db::connect_in_memory().await.unwrap();
        AuthService::new(UserStore::new(pool, config.bcrypt_cost), config)
    }

    #[actix_rt::test]
    async fn test_login_issues_verifiable_token() {
        let config = AuthConfig::new("service_secret", 4);
        let auth = service(&config).await;

        let profile = auth.register("alice", "pw1").await.unwrap();
        assert_eq!(profile.username, "alice");

        let token = auth.login("alice", "pw1").await.unwrap();
        let claims = SessionVerifier::new(&config).verify(&token).unwrap();
        assert_eq!(claims.username, "alice");
    }

    #[actix_rt::test]
    async fn test_login_failures_look_the_same() {
        let config = AuthConfig::new("service_secret", 4);
        let auth = service(&config).await;
        auth.register("alice", "pw1").await.unwrap();

        let wrong_password = auth.login("alice", "pw2").await.unwrap_err();
        let unknown_user = auth.login("bob", "pw1").await.unwrap_err();

        assert!(matches!(wrong_password, AppError::Unauthorized(_)));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }
}
