use actix_web::HttpResponse;

use crate::dto::auth::UserResponse;
use crate::middleware::auth::AuthenticatedUser;

/// Handler for GET /api/auth/me
///
/// Returns the identity behind the presented session token. Requires
/// authentication; any role is accepted.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "name": "Jane Doe",
///     "role": "realtor"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid, or expired token
pub async fn me(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(UserResponse {
        id: user.id,
        name: user.name,
        role: user.role,
    })
}
