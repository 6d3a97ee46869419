//! Main authentication service implementation

use std::sync::Arc;

use uuid::Uuid;

use hq_shared::config::AuthConfig;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::password::{hash_password, verify_password};
use super::product_key;

/// Signup input collected by the HTTP layer
#[derive(Debug, Clone)]
pub struct SignupData {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    /// Required for realtor/admin signup; ignored for buyers
    pub product_key: Option<String>,
}

/// Authentication service for signup, signin, and product-key issuance
pub struct AuthService<U: UserRepository> {
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthConfig,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT signing and verification
    /// * `config` - Authentication configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Registers a new account under the given role and signs it in.
    ///
    /// Realtor and admin signup must present a product key minted for the
    /// same email and role; buyer signup is open.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A signed access token for the new account
    /// * `Err(DomainError)` - Email conflict, product-key failure, or storage error
    pub async fn signup(&self, data: SignupData, role: UserRole) -> DomainResult<String> {
        // 1. Non-buyer roles are product-key gated
        if role.requires_product_key() {
            let key = data
                .product_key
                .as_deref()
                .ok_or(AuthError::ProductKeyRequired)?;
            if !product_key::verify(&data.email, role, &self.config.product_key_secret, key) {
                tracing::warn!(email = %data.email, role = %role, "Signup rejected: invalid product key");
                return Err(AuthError::InvalidProductKey.into());
            }
        }

        // 2. Email must not already have an account
        if self
            .user_repository
            .find_by_email(&data.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        // 3. Store the user with a hashed password
        let password_hash = hash_password(&data.password, self.config.bcrypt_cost)?;
        let user = User::new(data.name, data.phone, data.email, password_hash, role);
        let user = self.user_repository.create(&user).await?;
        tracing::info!(user_id = %user.id, role = %user.role, "New account registered");

        // 4. Issue the session token
        self.token_service.generate_token(&user)
    }

    /// Signs a user in with email and password.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A signed access token
    /// * `Err(DomainError)` - Unknown email or password mismatch
    pub async fn signin(&self, email: &str, password: &str) -> DomainResult<String> {
        // 1. Look up the account
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // 2. Check the password against the stored hash
        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidPassword.into());
        }

        // 3. Issue the session token
        self.token_service.generate_token(&user)
    }

    /// Mints a product key authorizing `email` to sign up as `role`.
    ///
    /// Buyer signup is open, so buyer keys do not exist.
    pub fn generate_product_key(&self, email: &str, role: UserRole) -> DomainResult<String> {
        if !role.requires_product_key() {
            return Err(DomainError::validation(
                "Product keys apply to realtor and admin signup only",
            ));
        }
        product_key::mint(
            email,
            role,
            &self.config.product_key_secret,
            self.config.bcrypt_cost,
        )
    }

    /// Verifies a bearer token and returns its claims.
    ///
    /// Used by the request guard; handlers never decode tokens themselves.
    pub fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        self.token_service.verify_token(token)
    }

    /// Loads the user behind a token subject.
    ///
    /// Returns `Ok(None)` when the account no longer exists; the guard
    /// treats that as an authentication failure.
    pub async fn find_user(&self, user_id: Uuid) -> DomainResult<Option<User>> {
        self.user_repository.find_by_id(user_id).await
    }
}
