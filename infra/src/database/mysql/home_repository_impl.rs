//! MySQL implementation of the HomeRepository trait.
//!
//! The listing query is assembled dynamically from the optional search
//! filters, and pulls each home's first image through a correlated
//! subquery so the list endpoint never needs a second round trip.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use hq_core::domain::entities::home::{Home, PropertyType};
use hq_core::domain::value_objects::{HomeFilters, HomeSummary, RealtorContact};
use hq_core::errors::{DomainError, DomainResult};
use hq_core::repositories::HomeRepository;

/// MySQL implementation of HomeRepository
pub struct MySqlHomeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlHomeRepository {
    /// Create a new MySQL home repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Parse the stored property_type column into a PropertyType
    fn parse_property_type(value: &str) -> DomainResult<PropertyType> {
        match value {
            "residential" => Ok(PropertyType::Residential),
            "condo" => Ok(PropertyType::Condo),
            other => Err(DomainError::Database {
                message: format!("Unknown property type: {}", other),
            }),
        }
    }

    /// Convert database row to Home entity
    fn row_to_home(row: &sqlx::mysql::MySqlRow) -> DomainResult<Home> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        let realtor_id: String = row
            .try_get("realtor_id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get realtor_id: {}", e),
            })?;

        let property_type: String =
            row.try_get("property_type")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get property_type: {}", e),
                })?;

        Ok(Home {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid home UUID: {}", e),
            })?,
            address: row.try_get("address").map_err(|e| DomainError::Database {
                message: format!("Failed to get address: {}", e),
            })?,
            city: row.try_get("city").map_err(|e| DomainError::Database {
                message: format!("Failed to get city: {}", e),
            })?,
            price: row.try_get("price").map_err(|e| DomainError::Database {
                message: format!("Failed to get price: {}", e),
            })?,
            land_size: row.try_get("land_size").map_err(|e| DomainError::Database {
                message: format!("Failed to get land_size: {}", e),
            })?,
            number_of_bedrooms: row
                .try_get("number_of_bedrooms")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get number_of_bedrooms: {}", e),
                })?,
            number_of_bathrooms: row
                .try_get("number_of_bathrooms")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get number_of_bathrooms: {}", e),
                })?,
            property_type: Self::parse_property_type(&property_type)?,
            realtor_id: Uuid::parse_str(&realtor_id).map_err(|e| DomainError::Database {
                message: format!("Invalid realtor UUID: {}", e),
            })?,
            listed_date: row
                .try_get::<DateTime<Utc>, _>("listed_date")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get listed_date: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    /// Convert a listing row (home columns plus first image url) to a summary
    fn row_to_summary(row: &sqlx::mysql::MySqlRow) -> DomainResult<HomeSummary> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        let property_type: String =
            row.try_get("property_type")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get property_type: {}", e),
                })?;

        Ok(HomeSummary {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid home UUID: {}", e),
            })?,
            address: row.try_get("address").map_err(|e| DomainError::Database {
                message: format!("Failed to get address: {}", e),
            })?,
            city: row.try_get("city").map_err(|e| DomainError::Database {
                message: format!("Failed to get city: {}", e),
            })?,
            price: row.try_get("price").map_err(|e| DomainError::Database {
                message: format!("Failed to get price: {}", e),
            })?,
            property_type: Self::parse_property_type(&property_type)?,
            number_of_bedrooms: row
                .try_get("number_of_bedrooms")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get number_of_bedrooms: {}", e),
                })?,
            number_of_bathrooms: row
                .try_get("number_of_bathrooms")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get number_of_bathrooms: {}", e),
                })?,
            image: row.try_get("image").map_err(|e| DomainError::Database {
                message: format!("Failed to get image: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl HomeRepository for MySqlHomeRepository {
    async fn find_many(&self, filters: &HomeFilters) -> DomainResult<Vec<HomeSummary>> {
        let mut query: QueryBuilder<MySql> = QueryBuilder::new(
            r#"SELECT h.id, h.address, h.city, h.price, h.property_type,
       h.number_of_bedrooms, h.number_of_bathrooms,
       (SELECT i.url FROM images i
        WHERE i.home_id = h.id
        ORDER BY i.created_at ASC, i.id ASC
        LIMIT 1) AS image
FROM homes h"#,
        );

        // Filters are AND-combined; absent filters add no clause
        let mut separator = " WHERE ";
        if let Some(city) = &filters.city {
            query
                .push(separator)
                .push("h.city = ")
                .push_bind(city.as_str());
            separator = " AND ";
        }
        if let Some(price) = &filters.price {
            if let Some(gte) = price.gte {
                query.push(separator).push("h.price >= ").push_bind(gte);
                separator = " AND ";
            }
            if let Some(lte) = price.lte {
                query.push(separator).push("h.price <= ").push_bind(lte);
                separator = " AND ";
            }
        }
        if let Some(property_type) = filters.property_type {
            query
                .push(separator)
                .push("h.property_type = ")
                .push_bind(property_type.as_str());
        }
        query.push(" ORDER BY h.listed_date DESC");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to list homes: {}", e),
            })?;

        rows.iter().map(Self::row_to_summary).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Home>> {
        let query = r#"
            SELECT id, address, city, price, land_size,
                   number_of_bedrooms, number_of_bathrooms, property_type,
                   realtor_id, listed_date, created_at, updated_at
            FROM homes
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find home by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_home(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, home: &Home) -> DomainResult<Home> {
        let query = r#"
            INSERT INTO homes (
                id, address, city, price, land_size,
                number_of_bedrooms, number_of_bathrooms, property_type,
                realtor_id, listed_date, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(home.id.to_string())
            .bind(&home.address)
            .bind(&home.city)
            .bind(home.price)
            .bind(home.land_size)
            .bind(home.number_of_bedrooms)
            .bind(home.number_of_bathrooms)
            .bind(home.property_type.as_str())
            .bind(home.realtor_id.to_string())
            .bind(home.listed_date)
            .bind(home.created_at)
            .bind(home.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create home: {}", e),
            })?;

        Ok(home.clone())
    }

    async fn update(&self, home: &Home) -> DomainResult<Home> {
        let query = r#"
            UPDATE homes SET
                address = ?,
                city = ?,
                price = ?,
                land_size = ?,
                number_of_bedrooms = ?,
                number_of_bathrooms = ?,
                property_type = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&home.address)
            .bind(&home.city)
            .bind(home.price)
            .bind(home.land_size)
            .bind(home.number_of_bedrooms)
            .bind(home.number_of_bathrooms)
            .bind(home.property_type.as_str())
            .bind(home.updated_at)
            .bind(home.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update home: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Home".to_string(),
            });
        }

        Ok(home.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let query = "DELETE FROM homes WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete home: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn realtor_by_home_id(&self, home_id: Uuid) -> DomainResult<Option<RealtorContact>> {
        let query = r#"
            SELECT u.id, u.name, u.email, u.phone
            FROM homes h
            INNER JOIN users u ON u.id = h.realtor_id
            WHERE h.id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(home_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find realtor for home: {}", e),
            })?;

        let row = match result {
            Some(row) => row,
            None => return Ok(None),
        };

        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Some(RealtorContact {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid realtor UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            phone: row.try_get("phone").map_err(|e| DomainError::Database {
                message: format!("Failed to get phone: {}", e),
            })?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_property_type_known_values() {
        assert_eq!(
            MySqlHomeRepository::parse_property_type("residential").unwrap(),
            PropertyType::Residential
        );
        assert_eq!(
            MySqlHomeRepository::parse_property_type("condo").unwrap(),
            PropertyType::Condo
        );
    }

    #[test]
    fn test_parse_property_type_rejects_unknown_value() {
        let err = MySqlHomeRepository::parse_property_type("castle").unwrap_err();
        assert!(matches!(err, DomainError::Database { .. }));
    }
}
