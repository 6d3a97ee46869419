//! Role-guard middleware for protected endpoints.
//!
//! There is exactly one token path in the API: routes wrapped with
//! [`RequireRoles`] get the `Authorization: Bearer` header verified through
//! the auth service, which checks the signature and registered claims and
//! then loads the account so authorization always uses the **stored** role,
//! not whatever the token claims. Unwrapped routes never touch tokens.
//!
//! Handlers read the resulting identity with the [`AuthenticatedUser`]
//! extractor; it fails with 401 when the guard did not run.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use hq_core::domain::entities::user::UserRole;
use hq_core::errors::{DomainResult, TokenError};
use hq_core::repositories::UserRepository;
use hq_core::services::auth::AuthService;
use hq_shared::types::response::ErrorResponse;

use crate::handlers::error::handle_domain_error;

/// Verified identity attached to the request by [`RequireRoles`]
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub role: UserRole,
}

/// Token-to-identity step behind the guard, object-safe so the middleware
/// does not need the repository type parameter.
#[async_trait]
pub trait AuthGate: Send + Sync {
    /// Verify the token and load the account it refers to.
    async fn authenticate(&self, token: &str) -> DomainResult<AuthenticatedUser>;
}

#[async_trait]
impl<U> AuthGate for AuthService<U>
where
    U: UserRepository + 'static,
{
    async fn authenticate(&self, token: &str) -> DomainResult<AuthenticatedUser> {
        let claims = self.verify_token(token)?;
        let user_id = claims.user_id().ok_or(TokenError::InvalidToken)?;

        // A token whose subject no longer exists is as good as forged
        let user = self
            .find_user(user_id)
            .await?
            .ok_or(TokenError::InvalidToken)?;

        Ok(AuthenticatedUser {
            id: user.id,
            name: user.name,
            role: user.role,
        })
    }
}

/// Route guard carrying the allowed-role list
pub struct RequireRoles {
    allowed: &'static [UserRole],
}

impl RequireRoles {
    /// Realtor-only routes (create/update/delete listings, read inquiries)
    pub fn realtor() -> Self {
        Self {
            allowed: &[UserRole::Realtor],
        }
    }

    /// Buyer-only routes (sending inquiries)
    pub fn buyer() -> Self {
        Self {
            allowed: &[UserRole::Buyer],
        }
    }

    /// Any signed-in account
    pub fn any_user() -> Self {
        Self {
            allowed: &[UserRole::Buyer, UserRole::Realtor, UserRole::Admin],
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRoles
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRolesMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRolesMiddleware {
            service: Rc::new(service),
            allowed: self.allowed,
        }))
    }
}

/// Role-guard middleware service
pub struct RequireRolesMiddleware<S> {
    service: Rc<S>,
    allowed: &'static [UserRole],
}

impl<S, B> Service<ServiceRequest> for RequireRolesMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let allowed = self.allowed;

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(missing_token_error()),
            };

            let gate = match req.app_data::<web::Data<Arc<dyn AuthGate>>>() {
                Some(gate) => Arc::clone(gate.get_ref()),
                None => {
                    log::error!("RequireRoles used without an AuthGate in app data");
                    return Err(gate_unavailable_error());
                }
            };

            let user = match gate.authenticate(&token).await {
                Ok(user) => user,
                Err(error) => {
                    let response = handle_domain_error(error);
                    return Err(
                        InternalError::from_response("authentication failed", response).into(),
                    );
                }
            };

            if !allowed.contains(&user.role) {
                log::warn!(
                    "User {} with role {} denied access to {}",
                    user.id,
                    user.role,
                    req.path()
                );
                return Err(forbidden_error());
            }

            req.extensions_mut().insert(user);
            service.call(req).await
        })
    }
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

fn missing_token_error() -> Error {
    let response = HttpResponse::Unauthorized().json(ErrorResponse::new(
        "MISSING_TOKEN",
        "Missing or invalid Authorization header",
    ));
    InternalError::from_response("missing bearer token", response).into()
}

fn forbidden_error() -> Error {
    let response = HttpResponse::Forbidden().json(ErrorResponse::new(
        "FORBIDDEN",
        "You do not have permission to access this resource",
    ));
    InternalError::from_response("role not permitted", response).into()
}

fn gate_unavailable_error() -> Error {
    let response = HttpResponse::InternalServerError().json(ErrorResponse::new(
        "INTERNAL_ERROR",
        "An internal server error occurred",
    ));
    InternalError::from_response("auth gate not configured", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                let response = HttpResponse::Unauthorized().json(ErrorResponse::new(
                    "MISSING_TOKEN",
                    "Authentication required",
                ));
                InternalError::from_response("authentication required", response).into()
            });

        ready(result)
    }
}
