//! Home listing entity and its associated images.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Property category of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Residential,
    Condo,
}

impl PropertyType {
    /// Stable lowercase form used in storage and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residential => "residential",
            PropertyType::Condo => "condo",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Home listing entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Home {
    /// Unique identifier for the home
    pub id: Uuid,

    /// Street address
    pub address: String,

    /// City (filtered by exact match in listings)
    pub city: String,

    /// Asking price
    pub price: f64,

    /// Land size in square meters
    pub land_size: f64,

    /// Number of bedrooms
    pub number_of_bedrooms: i32,

    /// Number of bathrooms (half-baths make this fractional)
    pub number_of_bathrooms: f64,

    /// Property category
    pub property_type: PropertyType,

    /// Owning realtor; set at creation and never reassigned
    pub realtor_id: Uuid,

    /// Date the home was listed
    pub listed_date: DateTime<Utc>,

    /// Timestamp when the row was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the row was last updated
    pub updated_at: DateTime<Utc>,
}

/// Partial update to a home; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeUpdate {
    pub address: Option<String>,
    pub city: Option<String>,
    pub price: Option<f64>,
    pub land_size: Option<f64>,
    pub number_of_bedrooms: Option<i32>,
    pub number_of_bathrooms: Option<f64>,
    pub property_type: Option<PropertyType>,
}

impl Home {
    /// Creates a new Home owned by the given realtor
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        address: String,
        city: String,
        price: f64,
        land_size: f64,
        number_of_bedrooms: i32,
        number_of_bathrooms: f64,
        property_type: PropertyType,
        realtor_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            address,
            city,
            price,
            land_size,
            number_of_bedrooms,
            number_of_bathrooms,
            property_type,
            realtor_id,
            listed_date: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the given user owns this listing
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.realtor_id == user_id
    }

    /// Applies the provided fields of a partial update.
    /// The owning realtor is not part of `HomeUpdate` and never changes.
    pub fn apply_update(&mut self, update: HomeUpdate) {
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(land_size) = update.land_size {
            self.land_size = land_size;
        }
        if let Some(bedrooms) = update.number_of_bedrooms {
            self.number_of_bedrooms = bedrooms;
        }
        if let Some(bathrooms) = update.number_of_bathrooms {
            self.number_of_bathrooms = bathrooms;
        }
        if let Some(property_type) = update.property_type {
            self.property_type = property_type;
        }
        self.updated_at = Utc::now();
    }
}

/// Photo attached to a home listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Unique identifier for the image
    pub id: Uuid,

    /// Public URL of the image
    pub url: String,

    /// Home this image belongs to
    pub home_id: Uuid,

    /// Timestamp when the row was created
    pub created_at: DateTime<Utc>,
}

impl Image {
    /// Creates a new Image attached to the given home
    pub fn new(url: String, home_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            home_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_home(realtor_id: Uuid) -> Home {
        Home::new(
            "12 Maplewood Lane".to_string(),
            "Toronto".to_string(),
            1_650_000.0,
            420.0,
            4,
            2.5,
            PropertyType::Residential,
            realtor_id,
        )
    }

    #[test]
    fn test_new_home_belongs_to_realtor() {
        let realtor_id = Uuid::new_v4();
        let home = sample_home(realtor_id);

        assert!(home.is_owned_by(realtor_id));
        assert!(!home.is_owned_by(Uuid::new_v4()));
        assert_eq!(home.number_of_bedrooms, 4);
        assert_eq!(home.number_of_bathrooms, 2.5);
    }

    #[test]
    fn test_apply_update_changes_only_provided_fields() {
        let realtor_id = Uuid::new_v4();
        let mut home = sample_home(realtor_id);

        home.apply_update(HomeUpdate {
            price: Some(1_500_000.0),
            city: Some("Mississauga".to_string()),
            ..Default::default()
        });

        assert_eq!(home.price, 1_500_000.0);
        assert_eq!(home.city, "Mississauga");
        // Untouched fields keep their values
        assert_eq!(home.address, "12 Maplewood Lane");
        assert_eq!(home.property_type, PropertyType::Residential);
        assert_eq!(home.realtor_id, realtor_id);
    }

    #[test]
    fn test_apply_update_bumps_updated_at() {
        let mut home = sample_home(Uuid::new_v4());
        let before = home.updated_at;

        home.apply_update(HomeUpdate {
            number_of_bedrooms: Some(5),
            ..Default::default()
        });

        assert!(home.updated_at >= before);
        assert_eq!(home.number_of_bedrooms, 5);
    }

    #[test]
    fn test_image_links_to_home() {
        let home_id = Uuid::new_v4();
        let image = Image::new("https://cdn.example.com/1.jpg".to_string(), home_id);

        assert_eq!(image.home_id, home_id);
        assert_eq!(image.url, "https://cdn.example.com/1.jpg");
    }

    #[test]
    fn test_property_type_serialization() {
        assert_eq!(
            serde_json::to_string(&PropertyType::Condo).unwrap(),
            "\"condo\""
        );
        let parsed: PropertyType = serde_json::from_str("\"residential\"").unwrap();
        assert_eq!(parsed, PropertyType::Residential);
    }
}
