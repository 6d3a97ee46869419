use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::home::HomeDetailResponse;
use crate::handlers::error::handle_domain_error;

use hq_core::repositories::{HomeRepository, ImageRepository, MessageRepository, UserRepository};

/// Handler for GET /api/homes/{id}
///
/// Returns the full record of a single home.
///
/// # Response
///
/// ## Success (200 OK)
/// The home with all listing fields.
///
/// ## Errors
/// - 404 Not Found: No home under the id
pub async fn home_detail<U, H, I, M>(
    state: web::Data<AppState<U, H, I, M>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: HomeRepository + 'static,
    I: ImageRepository + 'static,
    M: MessageRepository + 'static,
{
    let home_id = path.into_inner();

    match state.home_service.get_home(home_id).await {
        Ok(home) => HttpResponse::Ok().json(HomeDetailResponse::from(home)),
        Err(error) => handle_domain_error(error),
    }
}
