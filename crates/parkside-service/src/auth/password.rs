//! Argon2id hashing for account passwords. Hashes are stored in PHC string
//! format, so the parameters and salt travel with the hash itself.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::{ServiceError, ServiceResult};

/// Produces a PHC-encoded Argon2id hash of `password` with a fresh salt.
///
/// ## Errors
/// Returns an error if the hasher rejects its inputs.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::InvalidConfiguration(format!("Failed to hash password: {e}")))?;

    Ok(password_hash.to_string())
}

/// Checks `password` against the stored PHC hash, succeeding only on a match.
///
/// ## Errors
/// Returns `InvalidConfiguration` when the stored hash cannot be parsed and
/// `NotAuthenticated` when the password does not match.
pub fn verify_password(password: &str, password_hash: &str) -> ServiceResult<()> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| ServiceError::InvalidConfiguration(format!("Invalid password hash: {e}")))?;

    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|err| {
            tracing::trace!("Password verification failed: {}", err);
            ServiceError::NotAuthenticated
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn hashed_password_verifies_and_rejects_wrong_password() {
        let hash = hash_password("ranger-pass-1").expect("Failed to hash password");

        assert!(verify_password("ranger-pass-1", &hash).is_ok());
        assert!(verify_password("ranger-pass-2", &hash).is_err());
    }

    #[test_log::test]
    fn repeated_hashing_salts_independently() {
        let first = hash_password("shared-secret").expect("Failed to hash password");
        let second = hash_password("shared-secret").expect("Failed to hash password");

        // Fresh salt per call, so the encodings differ while both still verify.
        assert_ne!(first, second);
        assert!(verify_password("shared-secret", &first).is_ok());
        assert!(verify_password("shared-secret", &second).is_ok());
    }

    #[test_log::test]
    fn malformed_stored_hash_is_rejected() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
