//! Main home service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::home::{Home, HomeUpdate, Image, PropertyType};
use crate::domain::entities::message::Message;
use crate::domain::value_objects::{HomeFilters, HomeSummary, RealtorContact};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{HomeRepository, ImageRepository, MessageRepository};

/// Creation payload for a new home listing
#[derive(Debug, Clone)]
pub struct NewHome {
    pub address: String,
    pub city: String,
    pub price: f64,
    pub land_size: f64,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub property_type: PropertyType,
    /// One image row is created per URL, in order
    pub image_urls: Vec<String>,
}

/// Service for home CRUD and buyer inquiries
pub struct HomeService<H, I, M>
where
    H: HomeRepository,
    I: ImageRepository,
    M: MessageRepository,
{
    /// Home repository for database operations
    home_repository: Arc<H>,
    /// Image repository for listing photos
    image_repository: Arc<I>,
    /// Message repository for buyer inquiries
    message_repository: Arc<M>,
}

impl<H, I, M> HomeService<H, I, M>
where
    H: HomeRepository,
    I: ImageRepository,
    M: MessageRepository,
{
    /// Create a new home service
    pub fn new(
        home_repository: Arc<H>,
        image_repository: Arc<I>,
        message_repository: Arc<M>,
    ) -> Self {
        Self {
            home_repository,
            image_repository,
            message_repository,
        }
    }

    /// Lists homes matching the filters as summary rows.
    ///
    /// Each summary carries only the home's first image; no match is an
    /// empty list, not an error.
    pub async fn list_homes(&self, filters: &HomeFilters) -> DomainResult<Vec<HomeSummary>> {
        self.home_repository.find_many(filters).await
    }

    /// Fetches a single home.
    ///
    /// # Returns
    ///
    /// * `Ok(Home)` - The home
    /// * `Err(DomainError::NotFound)` - No home has that id
    pub async fn get_home(&self, id: Uuid) -> DomainResult<Home> {
        self.home_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Home"))
    }

    /// Creates a home owned by the given realtor, then its image rows.
    pub async fn create_home(&self, realtor_id: Uuid, data: NewHome) -> DomainResult<Home> {
        // 1. Persist the home row
        let home = Home::new(
            data.address,
            data.city,
            data.price,
            data.land_size,
            data.number_of_bedrooms,
            data.number_of_bathrooms,
            data.property_type,
            realtor_id,
        );
        let home = self.home_repository.create(&home).await?;

        // 2. Persist one image row per URL.
        // Not atomic: a failure here leaves the home row without images.
        let images: Vec<Image> = data
            .image_urls
            .into_iter()
            .map(|url| Image::new(url, home.id))
            .collect();
        self.image_repository.create_many(&images).await?;

        tracing::info!(home_id = %home.id, realtor_id = %realtor_id, images = images.len(), "Home listed");
        Ok(home)
    }

    /// Applies a partial update to an existing home.
    ///
    /// The owning realtor is never changed; ownership is enforced by the
    /// HTTP layer before this is called.
    pub async fn update_home(&self, id: Uuid, changes: HomeUpdate) -> DomainResult<Home> {
        let mut home = self.get_home(id).await?;
        home.apply_update(changes);
        self.home_repository.update(&home).await
    }

    /// Deletes a home and its images.
    ///
    /// Images go first; neither step is rolled back if the other fails.
    pub async fn delete_home(&self, id: Uuid) -> DomainResult<()> {
        self.image_repository.delete_by_home_id(id).await?;
        let deleted = self.home_repository.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found("Home"));
        }
        tracing::info!(home_id = %id, "Home deleted");
        Ok(())
    }

    /// Looks up the owning realtor's contact info for a home.
    ///
    /// The HTTP layer uses this for ownership checks on update, delete,
    /// and inquiry listing.
    pub async fn realtor_for_home(&self, home_id: Uuid) -> DomainResult<RealtorContact> {
        self.home_repository
            .realtor_by_home_id(home_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Home"))
    }

    /// Records a buyer's inquiry about a home.
    ///
    /// The message is addressed to the home's current owner.
    pub async fn inquire(
        &self,
        buyer_id: Uuid,
        home_id: Uuid,
        message: String,
    ) -> DomainResult<Message> {
        let home = self.get_home(home_id).await?;
        let message = Message::new(message, buyer_id, home.realtor_id, home_id);
        self.message_repository.create(&message).await
    }

    /// Returns all inquiries for a home, oldest first.
    pub async fn messages_for_home(&self, home_id: Uuid) -> DomainResult<Vec<Message>> {
        self.message_repository.find_by_home_id(home_id).await
    }
}
