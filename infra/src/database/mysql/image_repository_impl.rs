//! MySQL implementation of the ImageRepository trait.
//!
//! Images are only ever written in bulk alongside their home and deleted in
//! bulk before it, so the surface is deliberately small.

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use hq_core::domain::entities::home::Image;
use hq_core::errors::{DomainError, DomainResult};
use hq_core::repositories::ImageRepository;

/// MySQL implementation of ImageRepository
pub struct MySqlImageRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlImageRepository {
    /// Create a new MySQL image repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for MySqlImageRepository {
    async fn create_many(&self, images: &[Image]) -> DomainResult<()> {
        if images.is_empty() {
            return Ok(());
        }

        let mut query: QueryBuilder<MySql> =
            QueryBuilder::new("INSERT INTO images (id, url, home_id, created_at) ");

        query.push_values(images, |mut row, image| {
            row.push_bind(image.id.to_string())
                .push_bind(image.url.as_str())
                .push_bind(image.home_id.to_string())
                .push_bind(image.created_at);
        });

        query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create images: {}", e),
            })?;

        Ok(())
    }

    async fn delete_by_home_id(&self, home_id: Uuid) -> DomainResult<u64> {
        let query = "DELETE FROM images WHERE home_id = ?";

        let result = sqlx::query(query)
            .bind(home_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete images: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
