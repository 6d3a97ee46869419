//! User repository interface for persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Repository interface for user persistence.
///
/// The MySQL implementation lives in the infrastructure layer; an
/// in-memory mock ships alongside for tests.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by unique id.
    ///
    /// Returns `Ok(None)` when no user has that id.
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Finds a user by email (exact match; emails are unique).
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Persists a new user and returns the stored entity.
    async fn create(&self, user: &User) -> DomainResult<User>;
}
