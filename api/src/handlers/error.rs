//! Domain-error to HTTP-response mapping.
//!
//! Every handler and the role guard funnel failures through
//! [`handle_domain_error`] so status codes and body shape stay consistent
//! across the API.

use std::collections::HashMap;

use actix_web::HttpResponse;
use validator::ValidationErrors;

use hq_core::errors::{AuthError, DomainError, TokenError};
use hq_shared::types::response::ErrorResponse;

/// Convert a domain error into its HTTP response.
///
/// Status mapping:
/// - Conflict (409): duplicate email at signup
/// - NotFound (404): missing entities, unknown email at signin
/// - BadRequest (400): wrong password, domain validation failures
/// - Unauthorized (401): missing/invalid product key, token failures
/// - Forbidden (403): role or ownership violations
/// - InternalServerError (500): database and internal failures
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::EmailAlreadyRegistered => HttpResponse::Conflict().json(
                ErrorResponse::new("EMAIL_EXISTS", "Email already registered"),
            ),
            AuthError::InvalidCredentials => HttpResponse::NotFound().json(
                ErrorResponse::new("INVALID_CREDENTIALS", "Invalid credentials"),
            ),
            AuthError::InvalidPassword => HttpResponse::BadRequest().json(
                ErrorResponse::new("INVALID_CREDENTIALS", "Invalid credentials"),
            ),
            AuthError::ProductKeyRequired => HttpResponse::Unauthorized().json(
                ErrorResponse::new("PRODUCT_KEY_REQUIRED", "A product key is required"),
            ),
            AuthError::InvalidProductKey => HttpResponse::Unauthorized().json(
                ErrorResponse::new("INVALID_PRODUCT_KEY", "The product key is not valid"),
            ),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::TokenExpired => HttpResponse::Unauthorized().json(
                ErrorResponse::new("TOKEN_EXPIRED", "Token has expired"),
            ),
            TokenError::InvalidToken => HttpResponse::Unauthorized().json(
                ErrorResponse::new("INVALID_TOKEN", "Invalid authentication token"),
            ),
            TokenError::TokenGenerationFailed => HttpResponse::InternalServerError().json(
                ErrorResponse::new("INTERNAL_ERROR", "Failed to generate token"),
            ),
        },
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(
            ErrorResponse::new("NOT_FOUND", format!("{} not found", resource)),
        ),
        DomainError::Forbidden { message } => {
            HttpResponse::Forbidden().json(ErrorResponse::new("FORBIDDEN", message))
        }
        DomainError::Database { .. } => HttpResponse::InternalServerError().json(
            ErrorResponse::new("DATABASE_ERROR", "A database error occurred"),
        ),
        DomainError::Internal { .. } => HttpResponse::InternalServerError().json(
            ErrorResponse::new("INTERNAL_ERROR", "An internal server error occurred"),
        ),
    }
}

/// Convert `validator` failures into a 400 with per-field details.
pub fn validation_error_response(errors: ValidationErrors) -> HttpResponse {
    let mut details: HashMap<String, Vec<String>> = HashMap::new();

    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), messages);
    }

    log::warn!("Request validation failed: {:?}", details);

    HttpResponse::BadRequest().json(
        ErrorResponse::new("VALIDATION_ERROR", "Invalid request data").with_details(details),
    )
}
