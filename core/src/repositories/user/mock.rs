//! Mock implementation of UserRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};

use super::trait_::UserRepository;

/// Mock user repository backed by an in-memory map
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with an existing user
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Number of stored users
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Handle to the backing store, for linking with other mocks
    pub fn store(&self) -> Arc<RwLock<HashMap<Uuid, User>>> {
        Arc::clone(&self.users)
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: &User) -> DomainResult<User> {
        let mut users = self.users.write().await;

        // The real table has a unique index on email
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Database {
                message: "Duplicate entry for key 'users.email'".to_string(),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user.clone())
    }
}
