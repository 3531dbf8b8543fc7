pub mod extractors;
pub mod middleware;
pub mod password;
pub mod service;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use service::AuthService;
pub use token::{Claims, SessionVerifier, TokenSigner};

/// Username/password pair accepted by both `POST /register` and `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct Credentials {
    /// Must be between 1 and 64 characters.
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    /// Must be non-empty. bcrypt only looks at the first 72 bytes, so longer
    /// passwords are refused instead of being silently truncated.
    #[validate(length(min = 1), custom = "validate_password_bytes")]
    pub password: String,
}

fn validate_password_bytes(password: &str) -> Result<(), validator::ValidationError> {
    if password.len() > 72 {
        return Err(validator::ValidationError::new("password_too_long"));
    }
    Ok(())
}

/// Body returned by a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed session token; send it back verbatim in the `Authorization` header.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_credentials_validation() {
        assert!(credentials("alice", "pw1").validate().is_ok());
        assert!(credentials("", "pw1").validate().is_err());
        assert!(credentials("alice", "").validate().is_err());
        assert!(credentials(&"a".repeat(65), "pw1").validate().is_err());
    }

    #[test]
    fn test_password_byte_limit() {
        assert!(credentials("alice", &"p".repeat(72)).validate().is_ok());
        assert!(credentials("alice", &"p".repeat(73)).validate().is_err());
        // 36 two-byte characters are 72 bytes.
        assert!(credentials("alice", &"é".repeat(36)).validate().is_ok());
        assert!(credentials("alice", &"é".repeat(37)).validate().is_err());
    }
}
