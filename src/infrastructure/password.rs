//! Salted one-way password hashing (argon2id)

use crate::error::{QuireError, Result};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// argon2's recommended defaults
pub const DEFAULT_MEMORY_KIB: u32 = 19 * 1024;
pub const DEFAULT_ITERATIONS: u32 = 2;

/// Hashes new passwords with the configured cost and verifies stored PHC strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialHasher {
    memory_kib: u32,
    iterations: u32,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        CredentialHasher::new(DEFAULT_MEMORY_KIB, DEFAULT_ITERATIONS)
    }
}

impl CredentialHasher {
    pub fn new(memory_kib: u32, iterations: u32) -> Self {
        CredentialHasher {
            memory_kib,
            iterations,
        }
    }

    fn argon2(&self) -> Result<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, 1, None)
            .map_err(|e| QuireError::PasswordHash(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Check the cost parameters without hashing anything
    pub fn validate(&self) -> Result<()> {
        self.argon2().map(|_| ())
    }

    /// Hash `password` with a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2()?.hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Re-derive with the salt and parameters embedded in `stored` and compare
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored)?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> CredentialHasher {
        CredentialHasher::new(8, 1)
    }

    #[test]
    fn test_hash_is_not_the_password() {
        let hash = fast().hash("admin123").unwrap();
        assert!(!hash.contains("admin123"));
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_correct_and_wrong_password() {
        let hasher = fast();
        let hash = hasher.hash("admin123").unwrap();
        assert!(hasher.verify("admin123", &hash).unwrap());
        assert!(!hasher.verify("admin124", &hash).unwrap());
        assert!(!hasher.verify("", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let hasher = fast();
        let a = hasher.hash("same").unwrap();
        let b = hasher.hash("same").unwrap();
        assert_ne!(a, b);
        assert!(hasher.verify("same", &a).unwrap());
        assert!(hasher.verify("same", &b).unwrap());
    }

    #[test]
    fn test_verify_uses_parameters_from_stored_hash() {
        let stored = CredentialHasher::new(16, 2).hash("pw").unwrap();
        assert!(fast().verify("pw", &stored).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        match fast().verify("pw", "YWRtaW4xMjM=") {
            Err(QuireError::PasswordHash(_)) => {}
            other => panic!("Expected PasswordHash error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let hasher = CredentialHasher::new(0, 0);
        assert!(hasher.validate().is_err());
        assert!(hasher.hash("pw").is_err());
        assert!(fast().validate().is_ok());
    }
}
