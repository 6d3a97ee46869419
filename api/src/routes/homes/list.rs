use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::home::{HomeQuery, HomeSummaryResponse};
use crate::handlers::error::handle_domain_error;

use hq_core::domain::value_objects::home_filter::HomeFilters;
use hq_core::repositories::{HomeRepository, ImageRepository, MessageRepository, UserRepository};

/// Handler for GET /api/homes
///
/// Lists homes, newest listing first, each with its first image when one
/// exists. All query parameters are optional and combine conjunctively.
///
/// # Query Parameters
///
/// - `city`: exact city match
/// - `minPrice` / `maxPrice`: inclusive price bounds
/// - `propertyType`: `residential` or `condo`
///
/// # Response
///
/// ## Success (200 OK)
/// A JSON array of home summaries; an empty array when nothing matches.
pub async fn list_homes<U, H, I, M>(
    state: web::Data<AppState<U, H, I, M>>,
    query: web::Query<HomeQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: HomeRepository + 'static,
    I: ImageRepository + 'static,
    M: MessageRepository + 'static,
{
    let query = query.into_inner();
    let filters = HomeFilters::new(
        query.city,
        query.min_price,
        query.max_price,
        query.property_type,
    );

    match state.home_service.list_homes(&filters).await {
        Ok(homes) => {
            let response: Vec<HomeSummaryResponse> =
                homes.into_iter().map(HomeSummaryResponse::from).collect();
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(error),
    }
}
