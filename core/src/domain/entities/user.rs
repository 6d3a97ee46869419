//! User entity representing a registered account in the HomeQuest system.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to an account at signup; it never transitions afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Browses listings and sends inquiries to realtors
    Buyer,
    /// Creates and manages home listings
    Realtor,
    /// Administrative account; signup is product-key gated like a realtor's
    Admin,
}

impl UserRole {
    /// Stable lowercase form used in storage and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Buyer => "buyer",
            UserRole::Realtor => "realtor",
            UserRole::Admin => "admin",
        }
    }

    /// Whether signing up under this role requires a product key
    pub fn requires_product_key(&self) -> bool {
        !matches!(self, UserRole::Buyer)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Email address, unique across the system, used for signin
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Role fixed at signup
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with a fresh id and timestamps
    pub fn new(
        name: String,
        phone: String,
        email: String,
        password_hash: String,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the user may create and manage listings
    pub fn is_realtor(&self) -> bool {
        self.role == UserRole::Realtor
    }

    /// Checks if the user is a buyer
    pub fn is_buyer(&self) -> bool {
        self.role == UserRole::Buyer
    }
}
