//! Product keys gating realtor and admin signup.
//!
//! A key is the bcrypt hash of the deterministic string
//! `{email}-{role}-{secret}`. Holders of the configured secret mint keys
//! out-of-band; signup recomputes the material and verifies the submitted
//! key against it.

use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, DomainResult};

/// Deterministic key material for an email/role pair
fn key_material(email: &str, role: UserRole, secret: &str) -> String {
    format!("{}-{}-{}", email, role, secret)
}

/// Mints a product key authorizing `email` to sign up as `role`
pub fn mint(email: &str, role: UserRole, secret: &str, cost: u32) -> DomainResult<String> {
    bcrypt::hash(key_material(email, role, secret), cost).map_err(|e| DomainError::Internal {
        message: format!("Product key generation failed: {}", e),
    })
}

/// Checks a submitted product key against the expected material.
///
/// The key arrives from the client; one that does not even parse as a
/// bcrypt hash is simply not a valid key.
pub fn verify(email: &str, role: UserRole, secret: &str, key: &str) -> bool {
    bcrypt::verify(key_material(email, role, secret), key).unwrap_or(false)
}
