//! Application state and factory
//!
//! This module holds the shared application state and the factory that
//! assembles the Actix-web application. The binary builds the state from
//! the MySQL-backed repositories; integration tests build it from the
//! in-memory mocks.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use crate::middleware::auth::{AuthGate, RequireRoles};
use crate::middleware::cors::create_cors;
use crate::routes::auth::{me::me, product_key::generate_key, signin::signin, signup::signup};
use crate::routes::homes::{
    create::create_home, delete::delete_home, detail::home_detail, inquire::inquire_home,
    list::list_homes, messages::home_messages, update::update_home,
};

use hq_core::repositories::{HomeRepository, ImageRepository, MessageRepository, UserRepository};
use hq_core::services::auth::AuthService;
use hq_core::services::home::HomeService;
use hq_shared::types::response::ErrorResponse;

/// Application state that holds the shared services
pub struct AppState<U, H, I, M>
where
    U: UserRepository,
    H: HomeRepository,
    I: ImageRepository,
    M: MessageRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub home_service: Arc<HomeService<H, I, M>>,
}

/// Create and configure the application with all routes and middleware
pub fn create_app<U, H, I, M>(
    app_state: web::Data<AppState<U, H, I, M>>,
    auth_gate: Arc<dyn AuthGate>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: HomeRepository + 'static,
    I: ImageRepository + 'static,
    M: MessageRepository + 'static,
{
    // Configure CORS using our custom middleware
    let cors = create_cors();

    App::new()
        // Add application state; the gate is registered separately so the
        // role middleware can reach it without knowing the repository types
        .app_data(app_state)
        .app_data(web::Data::new(auth_gate))
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                // Auth routes
                .service(
                    web::scope("/auth")
                        .route("/signup/{user_type}", web::post().to(signup::<U, H, I, M>))
                        .route("/signin", web::post().to(signin::<U, H, I, M>))
                        .route("/key", web::post().to(generate_key::<U, H, I, M>))
                        .route("/me", web::get().to(me).wrap(RequireRoles::any_user())),
                )
                // Home listing routes
                .service(
                    web::scope("/homes")
                        .route("", web::get().to(list_homes::<U, H, I, M>))
                        .route(
                            "",
                            web::post()
                                .to(create_home::<U, H, I, M>)
                                .wrap(RequireRoles::realtor()),
                        )
                        .route("/{id}", web::get().to(home_detail::<U, H, I, M>))
                        .route(
                            "/{id}",
                            web::put()
                                .to(update_home::<U, H, I, M>)
                                .wrap(RequireRoles::realtor()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(delete_home::<U, H, I, M>)
                                .wrap(RequireRoles::realtor()),
                        )
                        .route(
                            "/{id}/inquire",
                            web::post()
                                .to(inquire_home::<U, H, I, M>)
                                .wrap(RequireRoles::buyer()),
                        )
                        .route(
                            "/{id}/messages",
                            web::get()
                                .to(home_messages::<U, H, I, M>)
                                .wrap(RequireRoles::realtor()),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "homequest-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
