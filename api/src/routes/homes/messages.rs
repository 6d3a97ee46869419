use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::home::MessageResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthenticatedUser;

use hq_core::errors::DomainError;
use hq_core::repositories::{HomeRepository, ImageRepository, MessageRepository, UserRepository};

/// Handler for GET /api/homes/{id}/messages
///
/// Returns the inquiries received for a home, oldest first. Only the
/// realtor who owns the listing may read them.
///
/// # Response
///
/// ## Success (200 OK)
/// A JSON array of messages; an empty array when none have arrived.
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid token
/// - 403 Forbidden: Caller does not own the listing
/// - 404 Not Found: No home under the id
pub async fn home_messages<U, H, I, M>(
    state: web::Data<AppState<U, H, I, M>>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: HomeRepository + 'static,
    I: ImageRepository + 'static,
    M: MessageRepository + 'static,
{
    let home_id = path.into_inner();

    let realtor = match state.home_service.realtor_for_home(home_id).await {
        Ok(realtor) => realtor,
        Err(error) => return handle_domain_error(error),
    };
    if realtor.id != user.id {
        log::warn!(
            "Realtor {} attempted to read messages for home {} owned by {}",
            user.id,
            home_id,
            realtor.id
        );
        return handle_domain_error(DomainError::Forbidden {
            message: "Only the listing realtor can read these messages".to_string(),
        });
    }

    match state.home_service.messages_for_home(home_id).await {
        Ok(messages) => {
            let response: Vec<MessageResponse> =
                messages.into_iter().map(MessageResponse::from).collect();
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(error),
    }
}
