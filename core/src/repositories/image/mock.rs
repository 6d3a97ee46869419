//! Mock implementation of ImageRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::home::Image;
use crate::errors::DomainResult;

use super::trait_::ImageRepository;

/// Mock image repository keyed by home id
pub struct MockImageRepository {
    images: Arc<RwLock<HashMap<Uuid, Vec<Image>>>>,
}

impl MockImageRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            images: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Handle to the backing store, for linking with other mocks
    pub fn store(&self) -> Arc<RwLock<HashMap<Uuid, Vec<Image>>>> {
        Arc::clone(&self.images)
    }

    /// Images stored for a home, in insertion order
    pub async fn images_for(&self, home_id: Uuid) -> Vec<Image> {
        self.images
            .read()
            .await
            .get(&home_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for MockImageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageRepository for MockImageRepository {
    async fn create_many(&self, images: &[Image]) -> DomainResult<()> {
        let mut store = self.images.write().await;
        for image in images {
            store
                .entry(image.home_id)
                .or_default()
                .push(image.clone());
        }
        Ok(())
    }

    async fn delete_by_home_id(&self, home_id: Uuid) -> DomainResult<u64> {
        let mut store = self.images.write().await;
        let removed = store.remove(&home_id).map(|list| list.len()).unwrap_or(0);
        Ok(removed as u64)
    }
}
