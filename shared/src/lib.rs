//! Shared configuration and common wire types for the HomeQuest server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error-response structure

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, JwtConfig, ServerConfig};
pub use types::ErrorResponse;
