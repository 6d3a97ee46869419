//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// Default access-token lifetime in seconds.
///
/// Deliberately enormous: issued tokens are effectively non-expiring and
/// sessions end client-side by discarding the token.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3_600_000_000;

/// JWT issuer claim for all tokens signed by this service
pub const TOKEN_ISSUER: &str = "homequest";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens (HS256)
    pub secret: String,

    /// Access token lifetime in seconds
    pub token_ttl_seconds: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("dev-jwt-secret-change-in-production"),
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
            issuer: String::from(TOKEN_ISSUER),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime in seconds
    pub fn with_ttl_seconds(mut self, seconds: i64) -> Self {
        self.token_ttl_seconds = seconds;
        self
    }

    /// Check if the default development secret is still in use
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "dev-jwt-secret-change-in-production"
    }
}

/// Authentication configuration: token signing, product keys, hashing cost
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT signing configuration
    pub jwt: JwtConfig,

    /// Secret mixed into product-key material for realtor/admin signup
    pub product_key_secret: String,

    /// bcrypt cost factor for passwords and product keys
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            product_key_secret: String::from("dev-product-key-secret-change-in-production"),
            bcrypt_cost: 10,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    /// (`JWT_SECRET`, `TOKEN_TTL_SECONDS`, `PRODUCT_KEY_SECRET`, `BCRYPT_COST`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.jwt.secret);
        let token_ttl_seconds = std::env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.jwt.token_ttl_seconds);
        let product_key_secret =
            std::env::var("PRODUCT_KEY_SECRET").unwrap_or(defaults.product_key_secret);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.bcrypt_cost);

        Self {
            jwt: JwtConfig {
                secret,
                token_ttl_seconds,
                issuer: defaults.jwt.issuer,
            },
            product_key_secret,
            bcrypt_cost,
        }
    }

    /// Set the bcrypt cost factor (tests lower this for speed)
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Set the product-key secret
    pub fn with_product_key_secret(mut self, secret: impl Into<String>) -> Self {
        self.product_key_secret = secret.into();
        self
    }
}
