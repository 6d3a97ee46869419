//! Mock implementation of HomeRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::home::{Home, Image};
use crate::domain::entities::user::User;
use crate::domain::value_objects::{HomeFilters, HomeSummary, RealtorContact};
use crate::errors::{DomainError, DomainResult};

use super::trait_::HomeRepository;

/// Mock home repository backed by in-memory maps.
///
/// The listing query and the realtor lookup join across images and users,
/// so this mock can share stores with [`MockImageRepository`] and
/// [`MockUserRepository`] via [`MockHomeRepository::linked`].
///
/// [`MockImageRepository`]: crate::repositories::image::MockImageRepository
/// [`MockUserRepository`]: crate::repositories::user::MockUserRepository
pub struct MockHomeRepository {
    homes: Arc<RwLock<HashMap<Uuid, Home>>>,
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    images: Arc<RwLock<HashMap<Uuid, Vec<Image>>>>,
}

impl MockHomeRepository {
    /// Create a mock with its own (empty) user and image stores
    pub fn new() -> Self {
        Self {
            homes: Arc::new(RwLock::new(HashMap::new())),
            users: Arc::new(RwLock::new(HashMap::new())),
            images: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock sharing the given user and image stores
    pub fn linked(
        users: Arc<RwLock<HashMap<Uuid, User>>>,
        images: Arc<RwLock<HashMap<Uuid, Vec<Image>>>>,
    ) -> Self {
        Self {
            homes: Arc::new(RwLock::new(HashMap::new())),
            users,
            images,
        }
    }

    /// Seed the repository with an existing home
    pub async fn insert(&self, home: Home) {
        self.homes.write().await.insert(home.id, home);
    }

    /// Number of stored homes
    pub async fn count(&self) -> usize {
        self.homes.read().await.len()
    }

    fn matches(home: &Home, filters: &HomeFilters) -> bool {
        if let Some(city) = &filters.city {
            if &home.city != city {
                return false;
            }
        }
        if let Some(price) = &filters.price {
            if let Some(gte) = price.gte {
                if home.price < gte {
                    return false;
                }
            }
            if let Some(lte) = price.lte {
                if home.price > lte {
                    return false;
                }
            }
        }
        if let Some(property_type) = filters.property_type {
            if home.property_type != property_type {
                return false;
            }
        }
        true
    }
}

impl Default for MockHomeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HomeRepository for MockHomeRepository {
    async fn find_many(&self, filters: &HomeFilters) -> DomainResult<Vec<HomeSummary>> {
        let homes = self.homes.read().await;
        let images = self.images.read().await;

        let mut summaries: Vec<HomeSummary> = homes
            .values()
            .filter(|home| Self::matches(home, filters))
            .map(|home| HomeSummary {
                id: home.id,
                address: home.address.clone(),
                city: home.city.clone(),
                price: home.price,
                property_type: home.property_type,
                number_of_bedrooms: home.number_of_bedrooms,
                number_of_bathrooms: home.number_of_bathrooms,
                image: images
                    .get(&home.id)
                    .and_then(|list| list.first())
                    .map(|image| image.url.clone()),
            })
            .collect();
        // Stable output order for assertions
        summaries.sort_by_key(|summary| summary.id);
        Ok(summaries)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Home>> {
        let homes = self.homes.read().await;
        Ok(homes.get(&id).cloned())
    }

    async fn create(&self, home: &Home) -> DomainResult<Home> {
        let mut homes = self.homes.write().await;
        homes.insert(home.id, home.clone());
        Ok(home.clone())
    }

    async fn update(&self, home: &Home) -> DomainResult<Home> {
        let mut homes = self.homes.write().await;

        if !homes.contains_key(&home.id) {
            return Err(DomainError::NotFound {
                resource: "Home".to_string(),
            });
        }

        homes.insert(home.id, home.clone());
        Ok(home.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let mut homes = self.homes.write().await;
        Ok(homes.remove(&id).is_some())
    }

    async fn realtor_by_home_id(&self, home_id: Uuid) -> DomainResult<Option<RealtorContact>> {
        let homes = self.homes.read().await;
        let users = self.users.read().await;

        Ok(homes.get(&home_id).and_then(|home| {
            users.get(&home.realtor_id).map(|user| RealtorContact {
                id: user.id,
                name: user.name.clone(),
                email: user.email.clone(),
                phone: user.phone.clone(),
            })
        }))
    }
}
