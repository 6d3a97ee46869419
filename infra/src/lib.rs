//! # Infrastructure Layer
//!
//! Concrete implementations of the persistence traits defined in `hq_core`,
//! backed by MySQL through SQLx. The API layer wires these repositories into
//! the domain services at startup.

// Re-export core error types for convenience
pub use hq_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::connection::DatabasePool;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
