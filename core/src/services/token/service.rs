//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use hq_shared::config::JwtConfig;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};

/// Service for signing and verifying access tokens (HS256).
///
/// One instance is built at startup and shared; the keys are derived from
/// the configured secret once.
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the JWT configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs an access token for the given user
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(DomainError)` - Token generation failed
    pub fn generate_token(&self, user: &User) -> DomainResult<String> {
        let claims = Claims::new(
            user.id,
            user.name.clone(),
            user.role,
            self.config.token_ttl_seconds,
            self.config.issuer.clone(),
        );

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign access token: {}", e);
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies a token's signature and registered claims (issuer, expiry)
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is invalid, expired, or malformed
    pub fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                DomainError::Token(TokenError::TokenExpired)
            } else {
                DomainError::Token(TokenError::InvalidToken)
            }
        })?;

        Ok(token_data.claims)
    }
}
