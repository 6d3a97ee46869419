//! Domain-specific error types for authentication and token handling
//!
//! The HTTP status for each variant is decided in the presentation layer;
//! these types only name the failure.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Signup attempted with an email that already has an account
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    /// Signin attempted with an email no account is registered under
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Signin attempted with a password that does not match the stored hash
    #[error("Invalid credentials")]
    InvalidPassword,

    /// Non-buyer signup submitted without a product key
    #[error("Product key required")]
    ProductKeyRequired,

    /// Product key did not verify against the expected key material
    #[error("Invalid product key")]
    InvalidProductKey,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
