use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthenticatedUser;

use hq_core::errors::DomainError;
use hq_core::repositories::{HomeRepository, ImageRepository, MessageRepository, UserRepository};

/// Handler for DELETE /api/homes/{id}
///
/// Removes a home listing and its image rows. Only the realtor who owns
/// the listing may delete it.
///
/// # Response
///
/// ## Success (204 No Content)
/// Empty body.
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid token
/// - 403 Forbidden: Caller does not own the listing
/// - 404 Not Found: No home under the id
pub async fn delete_home<U, H, I, M>(
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
            "Realtor {} attempted to delete home {} owned by {}",
            user.id,
            home_id,
            realtor.id
        );
        return handle_domain_error(DomainError::Forbidden {
            message: "Only the listing realtor can delete this home".to_string(),
        });
    }

    match state.home_service.delete_home(home_id).await {
        Ok(()) => {
            log::info!("Realtor {} removed home {}", user.id, home_id);
            HttpResponse::NoContent().finish()
        }
        Err(error) => handle_domain_error(error),
    }
}
