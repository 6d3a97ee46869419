use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{ProductKeyRequest, ProductKeyResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};

use hq_core::repositories::{HomeRepository, ImageRepository, MessageRepository, UserRepository};

/// Handler for POST /api/auth/key
///
/// Issues a product key that authorizes a realtor or admin signup for the
/// given email. The key is derived from the email and role, so the later
/// signup must use the same pair.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "jane@example.com",
///     "role": "realtor"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "productKey": "<key>"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid request data or a role that needs no key
pub async fn generate_key<U, H, I, M>(
    state: web::Data<AppState<U, H, I, M>>,
    request: web::Json<ProductKeyRequest>,
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
        .generate_product_key(&request.email, request.role)
    {
        Ok(product_key) => {
            log::info!("Issued {} product key", request.role);
            HttpResponse::Created().json(ProductKeyResponse { product_key })
        }
        Err(error) => handle_domain_error(error),
    }
}
