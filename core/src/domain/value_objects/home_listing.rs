//! Read-side projections returned by home queries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::home::PropertyType;

/// Summary row for the listing endpoint.
/// `image` carries the URL of the home's first image, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSummary {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub price: f64,
    pub property_type: PropertyType,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub image: Option<String>,
}

/// Contact projection of a home's owning realtor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtorContact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
}
