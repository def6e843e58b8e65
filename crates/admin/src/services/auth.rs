//! Shared-password admin authentication.
//!
//! The admin gate is one password for the whole deployment, verified
//! against an argon2 hash held in the environment. Hashing work runs on a
//! blocking thread so a burst of login attempts cannot stall the runtime.

use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier};
use secrecy::{ExposeSecret, SecretString};

/// Error type for authentication operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("malformed password hash: {0}")]
    MalformedHash(String),
    #[error("verification task failed: {0}")]
    TaskJoin(String),
}

/// Verify the submitted password against the configured argon2 hash.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` on mismatch,
/// `AuthError::MalformedHash` when the configured hash cannot be parsed.
pub async fn verify_admin_password(
    password_hash: &SecretString,
    candidate: &str,
) -> Result<(), AuthError> {
    let hash = password_hash.expose_secret().to_string();
    let candidate = candidate.to_string();

    tokio::task::spawn_blocking(move || {
        let parsed =
            PasswordHash::new(&hash).map_err(|e| AuthError::MalformedHash(e.to_string()))?;
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .map_err(|_| AuthError::InvalidCredentials)
    })
    .await
    .map_err(|e| AuthError::TaskJoin(e.to_string()))?
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

    use super::*;

    fn hash_of(password: &str) -> SecretString {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string();
        SecretString::from(hash)
    }

    #[tokio::test]
    async fn test_verify_accepts_correct_password() {
        let hash = hash_of("correct horse battery staple");
        assert!(
            verify_admin_password(&hash, "correct horse battery staple")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_verify_rejects_wrong_password() {
        let hash = hash_of("correct horse battery staple");
        let err = verify_admin_password(&hash, "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_verify_rejects_malformed_hash() {
        let hash = SecretString::from("not-a-hash");
        let err = verify_admin_password(&hash, "whatever").await.unwrap_err();
        assert!(matches!(err, AuthError::MalformedHash(_)));
    }
}
