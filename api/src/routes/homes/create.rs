use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::home::{CreateHomeRequest, HomeDetailResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::auth::AuthenticatedUser;

use hq_core::repositories::{HomeRepository, ImageRepository, MessageRepository, UserRepository};
use hq_core::services::home::NewHome;

/// Handler for POST /api/homes
///
/// Creates a home listing owned by the calling realtor, along with one
/// image row per submitted URL. Requires the realtor role.
///
/// # Request Body
///
/// ```json
/// {
///     "address": "12 Main St",
///     "city": "Toronto",
///     "price": 1250000,
///     "landSize": 4000,
///     "numberOfBedrooms": 3,
///     "numberOfBathrooms": 2.5,
///     "propertyType": "residential",
///     "images": [{ "url": "https://cdn.example.com/front.jpg" }]
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// The stored home with its generated id and listing date.
///
/// ## Errors
/// - 400 Bad Request: Invalid request data
/// - 401 Unauthorized: Missing or invalid token
/// - 403 Forbidden: Caller is not a realtor
pub async fn create_home<U, H, I, M>(
    state: web::Data<AppState<U, H, I, M>>,
    user: AuthenticatedUser,
    request: web::Json<CreateHomeRequest>,
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

    let data = NewHome {
        address: request.address,
        city: request.city,
        price: request.price,
        land_size: request.land_size,
        number_of_bedrooms: request.number_of_bedrooms,
        number_of_bathrooms: request.number_of_bathrooms,
        property_type: request.property_type,
        image_urls: request.images.into_iter().map(|image| image.url).collect(),
    };

    match state.home_service.create_home(user.id, data).await {
        Ok(home) => {
            log::info!("Realtor {} listed home {}", user.id, home.id);
            HttpResponse::Created().json(HomeDetailResponse::from(home))
        }
        Err(error) => handle_domain_error(error),
    }
}
