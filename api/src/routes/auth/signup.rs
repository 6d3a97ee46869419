use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{AuthResponse, SignupRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};

use hq_core::domain::entities::user::UserRole;
use hq_core::errors::DomainError;
use hq_core::repositories::{HomeRepository, ImageRepository, MessageRepository, UserRepository};
use hq_core::services::auth::SignupData;

/// Handler for POST /api/auth/signup/{user_type}
///
/// Registers a new account under the role named by the path segment and
/// returns a session token for it. Buyers sign up freely; realtor and
/// admin signups must carry a product key issued for their email.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Jane Doe",
///     "phone": "416-555-0199",
///     "email": "jane@example.com",
///     "password": "secret",
///     "productKey": "optional-for-buyers"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "token": "<jwt>"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Unknown user type or invalid request data
/// - 401 Unauthorized: Missing or invalid product key
/// - 409 Conflict: Email already registered
pub async fn signup<U, H, I, M>(
    state: web::Data<AppState<U, H, I, M>>,
    path: web::Path<String>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: HomeRepository + 'static,
    I: ImageRepository + 'static,
    M: MessageRepository + 'static,
{
    let role = match parse_role(&path) {
        Some(role) => role,
        None => {
            log::warn!("Rejected signup for unknown user type: {}", path);
            return handle_domain_error(DomainError::validation(format!(
                "Unknown user type: {}",
                path
            )));
        }
    };

    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    let data = SignupData {
        name: request.name,
        phone: request.phone,
        email: request.email,
        password: request.password,
        product_key: request.product_key,
    };

    match state.auth_service.signup(data, role).await {
        Ok(token) => {
            log::info!("New {} account registered", role);
            HttpResponse::Created().json(AuthResponse { token })
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Maps the path segment to a role; any other value is rejected
fn parse_role(segment: &str) -> Option<UserRole> {
    match segment {
        "buyer" => Some(UserRole::Buyer),
        "realtor" => Some(UserRole::Realtor),
        "admin" => Some(UserRole::Admin),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_role_accepts_known_segments() {
        assert_eq!(parse_role("buyer"), Some(UserRole::Buyer));
        assert_eq!(parse_role("realtor"), Some(UserRole::Realtor));
        assert_eq!(parse_role("admin"), Some(UserRole::Admin));
    }

    #[test]
    fn parse_role_rejects_unknown_segments() {
        assert_eq!(parse_role("agent"), None);
        assert_eq!(parse_role("Buyer"), None);
        assert_eq!(parse_role(""), None);
    }
}
