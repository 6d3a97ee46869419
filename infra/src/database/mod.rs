//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Repository trait implementations

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{
    MySqlHomeRepository, MySqlImageRepository, MySqlMessageRepository, MySqlUserRepository,
};
