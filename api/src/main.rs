//! HomeQuest API server
//!
//! Wires the MySQL-backed repositories into the domain services and serves
//! the HTTP API. Configuration comes from environment variables, with
//! development defaults for anything unset.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use hq_api::app::{create_app, AppState};
use hq_api::middleware::auth::AuthGate;
use hq_core::services::auth::AuthService;
use hq_core::services::home::HomeService;
use hq_core::services::token::TokenService;
use hq_infra::database::connection::DatabasePool;
use hq_infra::database::mysql::{
    MySqlHomeRepository, MySqlImageRepository, MySqlMessageRepository, MySqlUserRepository,
};
use hq_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging; log records are routed into the tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting HomeQuest API server");

    // Load configuration
    let config = AppConfig::from_env();
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; tokens are signed with the development default");
    }

    // Initialize the database and fail fast if it is unreachable
    let pool = DatabasePool::new(&config.database).await?;
    if !pool.health_check().await? {
        anyhow::bail!("database health check failed");
    }
    info!("Database connection verified");

    // Create repository implementations
    let user_repository = Arc::new(MySqlUserRepository::new(pool.pool().clone()));
    let home_repository = Arc::new(MySqlHomeRepository::new(pool.pool().clone()));
    let image_repository = Arc::new(MySqlImageRepository::new(pool.pool().clone()));
    let message_repository = Arc::new(MySqlMessageRepository::new(pool.pool().clone()));

    // Wire the services together
    let token_service = Arc::new(TokenService::new(config.auth.jwt.clone()));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service,
        config.auth.clone(),
    ));
    let home_service = Arc::new(HomeService::new(
        home_repository,
        image_repository,
        message_repository,
    ));

    let app_state = web::Data::new(AppState {
        auth_service: auth_service.clone(),
        home_service,
    });
    let auth_gate: Arc<dyn AuthGate> = auth_service;

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone(), auth_gate.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    pool.close().await;
    Ok(())
}
