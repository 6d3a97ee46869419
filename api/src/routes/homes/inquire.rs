use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::home::{InquireRequest, MessageResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::auth::AuthenticatedUser;

use hq_core::repositories::{HomeRepository, ImageRepository, MessageRepository, UserRepository};

/// Handler for POST /api/homes/{id}/inquire
///
/// Records a buyer's inquiry about a home. The message is addressed to
/// whoever owns the listing at the time of the inquiry. Requires the
/// buyer role.
///
/// # Request Body
///
/// ```json
/// {
///     "message": "Is the home still available?"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// The stored message with its routing ids.
///
/// ## Errors
/// - 400 Bad Request: Empty message
/// - 401 Unauthorized: Missing or invalid token
/// - 403 Forbidden: Caller is not a buyer
/// - 404 Not Found: No home under the id
pub async fn inquire_home<U, H, I, M>(
    state: web::Data<AppState<U, H, I, M>>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    request: web::Json<InquireRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: HomeRepository + 'static,
    I: ImageRepository + 'static,
    M: MessageRepository + 'static,
{
    let home_id = path.into_inner();
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state
        .home_service
        .inquire(user.id, home_id, request.message)
        .await
    {
        Ok(message) => {
            log::info!("Buyer {} inquired about home {}", user.id, home_id);
            HttpResponse::Created().json(MessageResponse::from(message))
        }
        Err(error) => handle_domain_error(error),
    }
}
