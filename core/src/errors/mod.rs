//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Shorthand for a not-found error naming the missing resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_bridge_into_domain_error() {
        let err: DomainError = AuthError::EmailAlreadyRegistered.into();
        assert!(matches!(err, DomainError::Auth(AuthError::EmailAlreadyRegistered)));
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn token_errors_bridge_into_domain_error() {
        let err: DomainError = TokenError::TokenExpired.into();
        assert_eq!(err.to_string(), "Token expired");
    }

    #[test]
    fn not_found_names_the_resource() {
        let err = DomainError::not_found("Home");
        assert_eq!(err.to_string(), "Resource not found: Home");
    }
}
