//! Image repository interface for persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::home::Image;
use crate::errors::DomainResult;

/// Repository interface for home images.
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Bulk-inserts images. A no-op for an empty slice.
    async fn create_many(&self, images: &[Image]) -> DomainResult<()>;

    /// Deletes all images belonging to a home. Returns the number removed.
    async fn delete_by_home_id(&self, home_id: Uuid) -> DomainResult<u64>;
}
