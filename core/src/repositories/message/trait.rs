//! Message repository interface for persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::message::Message;
use crate::errors::DomainResult;

/// Repository interface for inquiry messages.
/// Messages are append-only; there is no update or delete.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persists a new message and returns the stored entity.
    async fn create(&self, message: &Message) -> DomainResult<Message>;

    /// Returns all messages for a home, oldest first.
    async fn find_by_home_id(&self, home_id: Uuid) -> DomainResult<Vec<Message>>;
}
