//! Authentication request and response DTOs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hq_core::domain::entities::user::UserRole;

/// North-American phone shape: 555-555-1234, 555 555 1234, or 5555551234
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}[- ]?\d{3}[- ]?\d{4}$").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(regex(path = *PHONE_RE, message = "Phone must look like 555-555-1234"))]
    pub phone: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 5, message = "Password must be at least 5 characters"))]
    pub password: String,

    /// Required for realtor and admin signup, ignored for buyers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductKeyRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Must be realtor or admin; buyers never need a key
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductKeyResponse {
    pub product_key: String,
}

/// Identity echoed by GET /api/auth/me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub role: UserRole,
}
