//! Integration tests for the home listing and inquiry endpoints

use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{Service, ServiceResponse},
    http::header,
    test, web, Error, HttpResponse,
};
use std::sync::Arc;
use uuid::Uuid;

use hq_api::app::{create_app, AppState};
use hq_api::middleware::auth::AuthGate;
use hq_core::domain::entities::user::{User, UserRole};
use hq_core::repositories::{
    MockHomeRepository, MockImageRepository, MockMessageRepository, MockUserRepository,
};
use hq_core::services::auth::AuthService;
use hq_core::services::home::HomeService;
use hq_core::services::token::TokenService;
use hq_shared::config::{AuthConfig, JwtConfig};

type TestState =
    web::Data<AppState<MockUserRepository, MockHomeRepository, MockImageRepository, MockMessageRepository>>;

struct TestContext {
    state: TestState,
    gate: Arc<dyn AuthGate>,
    users: Arc<MockUserRepository>,
    images: Arc<MockImageRepository>,
    token_service: Arc<TokenService>,
}

/// Wires the real services over the in-memory repositories
fn test_context() -> TestContext {
    let user_repository = Arc::new(MockUserRepository::new());
    let image_repository = Arc::new(MockImageRepository::new());
    let message_repository = Arc::new(MockMessageRepository::new());
    let home_repository = Arc::new(MockHomeRepository::linked(
        user_repository.store(),
        image_repository.store(),
    ));

    let config = AuthConfig {
        jwt: JwtConfig::new("test-jwt-secret"),
        ..AuthConfig::default()
    }
    .with_bcrypt_cost(4)
    .with_product_key_secret("test-product-secret");

    let token_service = Arc::new(TokenService::new(config.jwt.clone()));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        token_service.clone(),
        config,
    ));
    let home_service = Arc::new(HomeService::new(
        home_repository,
        image_repository.clone(),
        message_repository,
    ));

    TestContext {
        state: web::Data::new(AppState {
            auth_service: auth_service.clone(),
            home_service,
        }),
        gate: auth_service,
        users: user_repository,
        images: image_repository,
        token_service,
    }
}

/// Stores a user directly and mints a token for it, skipping the signup flow
async fn seeded_user(ctx: &TestContext, name: &str, email: &str, role: UserRole) -> (User, String) {
    let user = User::new(
        name.to_string(),
        "416-555-0100".to_string(),
        email.to_string(),
        "unused-hash".to_string(),
        role,
    );
    ctx.users.insert(user.clone()).await;
    let token = ctx.token_service.generate_token(&user).expect("token");
    (user, token)
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Calls the app like `test::call_service`, but renders service-level errors
/// (the role guard surfaces rejections that way) into the HTTP responses a
/// real server would send instead of panicking on them.
async fn call_guarded<S, B, R>(app: &S, req: R) -> ServiceResponse<BoxBody>
where
    S: Service<R, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody + 'static,
{
    match test::try_call_service(app, req).await {
        Ok(response) => response.map_into_boxed_body(),
        Err(error) => ServiceResponse::new(
            test::TestRequest::default().to_http_request(),
            HttpResponse::from_error(error),
        ),
    }
}

fn home_body(address: &str, city: &str, price: f64, property_type: &str, urls: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "address": address,
        "city": city,
        "price": price,
        "landSize": 420.0,
        "numberOfBedrooms": 3,
        "numberOfBathrooms": 2.0,
        "propertyType": property_type,
        "images": urls.iter().map(|url| serde_json::json!({ "url": url })).collect::<Vec<_>>(),
    })
}

#[actix_web::test]
async fn test_realtor_creates_home_with_one_image_row_per_url() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (_, token) = seeded_user(&ctx, "Rhea Patel", "rhea@example.com", UserRole::Realtor).await;

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .set_json(home_body(
            "12 Maplewood Lane",
            "Toronto",
            1_650_000.0,
            "residential",
            &["https://cdn.example.com/front.jpg", "https://cdn.example.com/back.jpg"],
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["address"], "12 Maplewood Lane");
    assert_eq!(body["propertyType"], "residential");
    let home_id: Uuid = body["id"].as_str().expect("home id").parse().expect("uuid");

    let images = ctx.images.images_for(home_id).await;
    assert_eq!(images.len(), 2);
    assert!(images.iter().all(|image| image.home_id == home_id));

    // The created home is publicly readable
    let req = test::TestRequest::get()
        .uri(&format!("/api/homes/{}", home_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_buyer_cannot_create_home() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (_, token) = seeded_user(&ctx, "Bao Nguyen", "bao@example.com", UserRole::Buyer).await;

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .set_json(home_body("12 Maplewood Lane", "Toronto", 1_650_000.0, "residential", &[]))
        .to_request();
    let resp = call_guarded(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_create_home_without_token_is_unauthorized() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .set_json(home_body("12 Maplewood Lane", "Toronto", 1_650_000.0, "residential", &[]))
        .to_request();
    let resp = call_guarded(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "MISSING_TOKEN");
}

#[actix_web::test]
async fn test_create_home_validates_body() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (_, token) = seeded_user(&ctx, "Rhea Patel", "rhea@example.com", UserRole::Realtor).await;

    let mut body = home_body("12 Maplewood Lane", "Toronto", 1_650_000.0, "residential", &[]);
    body["price"] = serde_json::json!(0);
    body["numberOfBedrooms"] = serde_json::json!(0);

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["price"].is_array());
    assert!(body["details"]["number_of_bedrooms"].is_array());
}

#[actix_web::test]
async fn test_list_homes_applies_filters() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (_, token) = seeded_user(&ctx, "Rhea Patel", "rhea@example.com", UserRole::Realtor).await;

    for body in [
        home_body("12 Maplewood Lane", "Toronto", 2_000_000.0, "residential", &["https://cdn.example.com/maple.jpg"]),
        home_body("8 Bank St", "Ottawa", 900_000.0, "condo", &[]),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/homes")
            .insert_header((header::AUTHORIZATION, bearer(&token)))
            .set_json(body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);
    }

    let req = test::TestRequest::get()
        .uri("/api/homes?city=Toronto&minPrice=1500000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let homes = body.as_array().expect("array body");
    assert_eq!(homes.len(), 1);
    assert_eq!(homes[0]["city"], "Toronto");
    assert_eq!(homes[0]["image"], "https://cdn.example.com/maple.jpg");

    let req = test::TestRequest::get()
        .uri("/api/homes?propertyType=condo")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let homes = body.as_array().expect("array body");
    assert_eq!(homes.len(), 1);
    assert_eq!(homes[0]["address"], "8 Bank St");
    assert!(homes[0]["image"].is_null());
}

#[actix_web::test]
async fn test_list_homes_without_matches_is_empty() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;

    let req = test::TestRequest::get().uri("/api/homes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));
}

#[actix_web::test]
async fn test_home_detail_missing_is_not_found() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/homes/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_owner_updates_home_partially() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (_, token) = seeded_user(&ctx, "Rhea Patel", "rhea@example.com", UserRole::Realtor).await;

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .set_json(home_body("12 Maplewood Lane", "Toronto", 1_650_000.0, "residential", &[]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let home_id = created["id"].as_str().expect("home id").to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/homes/{}", home_id))
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .set_json(serde_json::json!({ "price": 1_500_000.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["price"], 1_500_000.0);
    // Untouched fields survive
    assert_eq!(body["address"], "12 Maplewood Lane");
    assert_eq!(body["numberOfBedrooms"], 3);
}

#[actix_web::test]
async fn test_update_by_non_owner_is_forbidden() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (_, owner_token) = seeded_user(&ctx, "Rhea Patel", "rhea@example.com", UserRole::Realtor).await;
    let (_, other_token) = seeded_user(&ctx, "Omar Haddad", "omar@example.com", UserRole::Realtor).await;

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&owner_token)))
        .set_json(home_body("12 Maplewood Lane", "Toronto", 1_650_000.0, "residential", &[]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let home_id = created["id"].as_str().expect("home id").to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/homes/{}", home_id))
        .insert_header((header::AUTHORIZATION, bearer(&other_token)))
        .set_json(serde_json::json!({ "price": 1.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_owner_deletes_home_and_its_images() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (_, token) = seeded_user(&ctx, "Rhea Patel", "rhea@example.com", UserRole::Realtor).await;

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .set_json(home_body(
            "12 Maplewood Lane",
            "Toronto",
            1_650_000.0,
            "residential",
            &["https://cdn.example.com/front.jpg"],
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let home_id: Uuid = created["id"].as_str().expect("home id").parse().expect("uuid");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/homes/{}", home_id))
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    assert!(ctx.images.images_for(home_id).await.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/homes/{}", home_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_delete_by_non_owner_is_forbidden() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (_, owner_token) = seeded_user(&ctx, "Rhea Patel", "rhea@example.com", UserRole::Realtor).await;
    let (_, other_token) = seeded_user(&ctx, "Omar Haddad", "omar@example.com", UserRole::Realtor).await;

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&owner_token)))
        .set_json(home_body("12 Maplewood Lane", "Toronto", 1_650_000.0, "residential", &[]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let home_id = created["id"].as_str().expect("home id").to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/homes/{}", home_id))
        .insert_header((header::AUTHORIZATION, bearer(&other_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}

#[actix_web::test]
async fn test_buyer_inquires_and_owner_reads_messages() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (realtor, realtor_token) =
        seeded_user(&ctx, "Rhea Patel", "rhea@example.com", UserRole::Realtor).await;
    let (buyer, buyer_token) = seeded_user(&ctx, "Bao Nguyen", "bao@example.com", UserRole::Buyer).await;

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&realtor_token)))
        .set_json(home_body("12 Maplewood Lane", "Toronto", 1_650_000.0, "residential", &[]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let home_id = created["id"].as_str().expect("home id").to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/homes/{}/inquire", home_id))
        .insert_header((header::AUTHORIZATION, bearer(&buyer_token)))
        .set_json(serde_json::json!({ "message": "Is the home still available?" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Is the home still available?");
    assert_eq!(body["homeId"], home_id);
    assert_eq!(body["buyerId"], buyer.id.to_string());
    assert_eq!(body["realtorId"], realtor.id.to_string());

    let req = test::TestRequest::get()
        .uri(&format!("/api/homes/{}/messages", home_id))
        .insert_header((header::AUTHORIZATION, bearer(&realtor_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let messages = body.as_array().expect("array body");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["buyerId"], buyer.id.to_string());
}

#[actix_web::test]
async fn test_realtor_cannot_inquire() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (_, token) = seeded_user(&ctx, "Rhea Patel", "rhea@example.com", UserRole::Realtor).await;

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .set_json(home_body("12 Maplewood Lane", "Toronto", 1_650_000.0, "residential", &[]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let home_id = created["id"].as_str().expect("home id").to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/homes/{}/inquire", home_id))
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .set_json(serde_json::json!({ "message": "Selling to myself" }))
        .to_request();
    let resp = call_guarded(&app, req).await;
    assert_eq!(resp.status(), 403);
}

#[actix_web::test]
async fn test_messages_hidden_from_other_realtors() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (_, owner_token) = seeded_user(&ctx, "Rhea Patel", "rhea@example.com", UserRole::Realtor).await;
    let (_, other_token) = seeded_user(&ctx, "Omar Haddad", "omar@example.com", UserRole::Realtor).await;

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&owner_token)))
        .set_json(home_body("12 Maplewood Lane", "Toronto", 1_650_000.0, "residential", &[]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let home_id = created["id"].as_str().expect("home id").to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/homes/{}/messages", home_id))
        .insert_header((header::AUTHORIZATION, bearer(&other_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}

#[actix_web::test]
async fn test_inquire_about_missing_home_is_not_found() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (_, token) = seeded_user(&ctx, "Bao Nguyen", "bao@example.com", UserRole::Buyer).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/homes/{}/inquire", Uuid::new_v4()))
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .set_json(serde_json::json!({ "message": "Anyone home?" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_authorization_follows_stored_role_not_token_claim() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;
    let (user, token) = seeded_user(&ctx, "Rhea Patel", "rhea@example.com", UserRole::Realtor).await;

    // Demote the stored account after the token was minted; the token
    // still claims the realtor role.
    let mut demoted = user;
    demoted.role = UserRole::Buyer;
    ctx.users.insert(demoted).await;

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .set_json(home_body("12 Maplewood Lane", "Toronto", 1_650_000.0, "residential", &[]))
        .to_request();
    let resp = call_guarded(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_token_for_deleted_account_is_rejected() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.gate.clone())).await;

    // Mint a valid token without ever storing the account
    let ghost = User::new(
        "Ghost".to_string(),
        "416-555-0100".to_string(),
        "ghost@example.com".to_string(),
        "unused-hash".to_string(),
        UserRole::Realtor,
    );
    let token = ctx.token_service.generate_token(&ghost).expect("token");

    let req = test::TestRequest::post()
        .uri("/api/homes")
        .insert_header((header::AUTHORIZATION, bearer(&token)))
        .set_json(home_body("12 Maplewood Lane", "Toronto", 1_650_000.0, "residential", &[]))
        .to_request();
    let resp = call_guarded(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_TOKEN");
}
