//! Mock implementation of MessageRepository for testing

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::message::Message;
use crate::errors::DomainResult;

use super::trait_::MessageRepository;

/// Mock message repository backed by an in-memory list
pub struct MockMessageRepository {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MockMessageRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored messages
    pub async fn count(&self) -> usize {
        self.messages.read().await.len()
    }
}

impl Default for MockMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for MockMessageRepository {
    async fn create(&self, message: &Message) -> DomainResult<Message> {
        let mut messages = self.messages.write().await;
        messages.push(message.clone());
        Ok(message.clone())
    }

    async fn find_by_home_id(&self, home_id: Uuid) -> DomainResult<Vec<Message>> {
        let messages = self.messages.read().await;
        Ok(messages
            .iter()
            .filter(|message| message.home_id == home_id)
            .cloned()
            .collect())
    }
}
