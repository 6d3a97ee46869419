//! Home listing request and response DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use chrono::{DateTime, Utc};
use hq_core::domain::entities::home::{Home, HomeUpdate, PropertyType};
use hq_core::domain::entities::message::Message;
use hq_core::domain::value_objects::HomeSummary;

/// Query parameters accepted by GET /api/homes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeQuery {
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub property_type: Option<PropertyType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ImageDto {
    #[validate(length(min = 1, message = "Image url is required"))]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHomeRequest {
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be positive"))]
    pub price: f64,

    #[validate(range(exclusive_min = 0.0, message = "Land size must be positive"))]
    pub land_size: f64,

    #[validate(range(min = 1, message = "At least one bedroom is required"))]
    pub number_of_bedrooms: i32,

    #[validate(range(exclusive_min = 0.0, message = "Bathroom count must be positive"))]
    pub number_of_bathrooms: f64,

    pub property_type: PropertyType,

    #[validate(nested)]
    pub images: Vec<ImageDto>,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHomeRequest {
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: Option<String>,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: Option<String>,

    #[validate(range(exclusive_min = 0.0, message = "Price must be positive"))]
    pub price: Option<f64>,

    #[validate(range(exclusive_min = 0.0, message = "Land size must be positive"))]
    pub land_size: Option<f64>,

    #[validate(range(min = 1, message = "At least one bedroom is required"))]
    pub number_of_bedrooms: Option<i32>,

    #[validate(range(exclusive_min = 0.0, message = "Bathroom count must be positive"))]
    pub number_of_bathrooms: Option<f64>,

    pub property_type: Option<PropertyType>,
}

impl From<UpdateHomeRequest> for HomeUpdate {
    fn from(request: UpdateHomeRequest) -> Self {
        HomeUpdate {
            address: request.address,
            city: request.city,
            price: request.price,
            land_size: request.land_size,
            number_of_bedrooms: request.number_of_bedrooms,
            number_of_bathrooms: request.number_of_bathrooms,
            property_type: request.property_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InquireRequest {
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// One row of the listing response; `image` is the first image URL, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSummaryResponse {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub price: f64,
    pub property_type: PropertyType,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub image: Option<String>,
}

impl From<HomeSummary> for HomeSummaryResponse {
    fn from(summary: HomeSummary) -> Self {
        Self {
            id: summary.id,
            address: summary.address,
            city: summary.city,
            price: summary.price,
            property_type: summary.property_type,
            number_of_bedrooms: summary.number_of_bedrooms,
            number_of_bathrooms: summary.number_of_bathrooms,
            image: summary.image,
        }
    }
}

/// Full home record; the owning realtor id stays internal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDetailResponse {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub price: f64,
    pub land_size: f64,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub property_type: PropertyType,
    pub listed_date: DateTime<Utc>,
}

impl From<Home> for HomeDetailResponse {
    fn from(home: Home) -> Self {
        Self {
            id: home.id,
            address: home.address,
            city: home.city,
            price: home.price,
            land_size: home.land_size,
            number_of_bedrooms: home.number_of_bedrooms,
            number_of_bathrooms: home.number_of_bathrooms,
            property_type: home.property_type,
            listed_date: home.listed_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Uuid,
    pub message: String,
    pub home_id: Uuid,
    pub buyer_id: Uuid,
    pub realtor_id: Uuid,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            message: message.message,
            home_id: message.home_id,
            buyer_id: message.buyer_id,
            realtor_id: message.realtor_id,
        }
    }
}
