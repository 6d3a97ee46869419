//! Password hashing helpers built on bcrypt.

use crate::errors::{DomainError, DomainResult};

/// Hashes a plaintext password with the given bcrypt cost factor
pub fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    bcrypt::hash(password, cost).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// The hash comes from our own storage, so a malformed hash is an
/// internal error rather than a failed match.
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
        message: format!("Password verification failed: {}", e),
    })
}
