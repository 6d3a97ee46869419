//! MySQL implementation of the MessageRepository trait.
//!
//! Stores buyer inquiries addressed to the realtor who listed the home.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hq_core::domain::entities::message::Message;
use hq_core::errors::{DomainError, DomainResult};
use hq_core::repositories::MessageRepository;

/// MySQL implementation of MessageRepository
pub struct MySqlMessageRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlMessageRepository {
    /// Create a new MySQL message repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Message entity
    fn row_to_message(row: &sqlx::mysql::MySqlRow) -> DomainResult<Message> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        let buyer_id: String = row.try_get("buyer_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get buyer_id: {}", e),
        })?;

        let realtor_id: String = row
            .try_get("realtor_id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get realtor_id: {}", e),
            })?;

        let home_id: String = row.try_get("home_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get home_id: {}", e),
        })?;

        Ok(Message {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid message UUID: {}", e),
            })?,
            message: row.try_get("message").map_err(|e| DomainError::Database {
                message: format!("Failed to get message: {}", e),
            })?,
            buyer_id: Uuid::parse_str(&buyer_id).map_err(|e| DomainError::Database {
                message: format!("Invalid buyer UUID: {}", e),
            })?,
            realtor_id: Uuid::parse_str(&realtor_id).map_err(|e| DomainError::Database {
                message: format!("Invalid realtor UUID: {}", e),
            })?,
            home_id: Uuid::parse_str(&home_id).map_err(|e| DomainError::Database {
                message: format!("Invalid home UUID: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl MessageRepository for MySqlMessageRepository {
    async fn create(&self, message: &Message) -> DomainResult<Message> {
        let query = r#"
            INSERT INTO messages (
                id, message, buyer_id, realtor_id, home_id, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(message.id.to_string())
            .bind(&message.message)
            .bind(message.buyer_id.to_string())
            .bind(message.realtor_id.to_string())
            .bind(message.home_id.to_string())
            .bind(message.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create message: {}", e),
            })?;

        Ok(message.clone())
    }

    async fn find_by_home_id(&self, home_id: Uuid) -> DomainResult<Vec<Message>> {
        let query = r#"
            SELECT id, message, buyer_id, realtor_id, home_id, created_at
            FROM messages
            WHERE home_id = ?
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .bind(home_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find messages for home: {}", e),
            })?;

        rows.iter().map(Self::row_to_message).collect()
    }
}
