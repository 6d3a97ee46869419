use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::home::{HomeDetailResponse, UpdateHomeRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::auth::AuthenticatedUser;

use hq_core::domain::entities::home::HomeUpdate;
use hq_core::errors::DomainError;
use hq_core::repositories::{HomeRepository, ImageRepository, MessageRepository, UserRepository};

/// Handler for PUT /api/homes/{id}
///
/// Applies a partial update to a home listing. Only the realtor who owns
/// the listing may change it; absent fields are left as they are.
///
/// # Response
///
/// ## Success (200 OK)
/// The home after the update.
///
/// ## Errors
/// - 400 Bad Request: Invalid request data
/// - 401 Unauthorized: Missing or invalid token
/// - 403 Forbidden: Caller does not own the listing
/// - 404 Not Found: No home under the id
pub async fn update_home<U, H, I, M>(
    state: web::Data<AppState<U, H, I, M>>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    request: web::Json<UpdateHomeRequest>,
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

    let realtor = match state.home_service.realtor_for_home(home_id).await {
        Ok(realtor) => realtor,
        Err(error) => return handle_domain_error(error),
    };
    if realtor.id != user.id {
        log::warn!(
            "Realtor {} attempted to update home {} owned by {}",
            user.id,
            home_id,
            realtor.id
        );
        return handle_domain_error(DomainError::Forbidden {
            message: "Only the listing realtor can update this home".to_string(),
        });
    }

    match state
        .home_service
        .update_home(home_id, HomeUpdate::from(request))
        .await
    {
        Ok(home) => HttpResponse::Ok().json(HomeDetailResponse::from(home)),
        Err(error) => handle_domain_error(error),
    }
}
