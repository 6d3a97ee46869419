//! Configuration module with per-concern sub-modules
//!
//! - `auth` - JWT signing, product-key secret, password hashing cost
//! - `database` - Connection URL and pool sizing
//! - `server` - HTTP listen address

pub mod auth;
pub mod database;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables,
    /// falling back to development defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_complete() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert!(config.database.max_connections > 0);
        assert!(!config.auth.jwt.secret.is_empty());
    }
}
