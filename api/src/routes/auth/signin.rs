use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{AuthResponse, SigninRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};

use hq_core::repositories::{HomeRepository, ImageRepository, MessageRepository, UserRepository};

/// Handler for POST /api/auth/signin
///
/// Authenticates an existing account by email and password and returns a
/// fresh session token.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "jane@example.com",
///     "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "<jwt>"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid request data or wrong password
/// - 404 Not Found: No account registered under the email
pub async fn signin<U, H, I, M>(
    state: web::Data<AppState<U, H, I, M>>,
    request: web::Json<SigninRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: HomeRepository + 'static,
    I: ImageRepository + 'static,
    M: MessageRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state
        .auth_service
        .signin(&request.email, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(AuthResponse { token }),
        Err(error) => handle_domain_error(error),
    }
}
