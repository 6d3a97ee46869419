//! Unit tests for the home service against mock repositories.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::home::{HomeUpdate, PropertyType};
use crate::domain::entities::user::{User, UserRole};
use crate::domain::value_objects::HomeFilters;
use crate::errors::DomainError;
use crate::repositories::{
    MockHomeRepository, MockImageRepository, MockMessageRepository, MockUserRepository,
};
use crate::services::home::{HomeService, NewHome};

struct Fixture {
    user_repository: Arc<MockUserRepository>,
    image_repository: Arc<MockImageRepository>,
    message_repository: Arc<MockMessageRepository>,
    service: HomeService<MockHomeRepository, MockImageRepository, MockMessageRepository>,
}

fn build_service() -> Fixture {
    let user_repository = Arc::new(MockUserRepository::new());
    let image_repository = Arc::new(MockImageRepository::new());
    let message_repository = Arc::new(MockMessageRepository::new());
    // The home mock joins against the same user and image stores
    let home_repository = Arc::new(MockHomeRepository::linked(
        user_repository.store(),
        image_repository.store(),
    ));
    let service = HomeService::new(
        home_repository,
        Arc::clone(&image_repository),
        Arc::clone(&message_repository),
    );
    Fixture {
        user_repository,
        image_repository,
        message_repository,
        service,
    }
}

fn new_home(city: &str, price: f64, property_type: PropertyType, urls: &[&str]) -> NewHome {
    NewHome {
        address: "12 Maplewood Lane".to_string(),
        city: city.to_string(),
        price,
        land_size: 420.0,
        number_of_bedrooms: 4,
        number_of_bathrooms: 2.5,
        property_type,
        image_urls: urls.iter().map(|url| url.to_string()).collect(),
    }
}

fn realtor(name: &str, email: &str) -> User {
    User::new(
        name.to_string(),
        "416-555-0177".to_string(),
        email.to_string(),
        "$2b$04$hash".to_string(),
        UserRole::Realtor,
    )
}

#[tokio::test]
async fn create_home_creates_one_image_row_per_url() {
    let fixture = build_service();
    let realtor_id = Uuid::new_v4();

    let urls = ["https://cdn.example.com/a.jpg", "https://cdn.example.com/b.jpg", "https://cdn.example.com/c.jpg"];
    let home = fixture
        .service
        .create_home(realtor_id, new_home("Toronto", 1_650_000.0, PropertyType::Residential, &urls))
        .await
        .unwrap();

    let images = fixture.image_repository.images_for(home.id).await;
    assert_eq!(images.len(), 3);
    for (image, url) in images.iter().zip(urls.iter()) {
        assert_eq!(image.home_id, home.id);
        assert_eq!(image.url, *url);
    }
    assert_eq!(home.realtor_id, realtor_id);
}

#[tokio::test]
async fn list_homes_applies_filters_and_first_image() {
    let fixture = build_service();
    let realtor_id = Uuid::new_v4();

    fixture
        .service
        .create_home(
            realtor_id,
            new_home(
                "Toronto",
                1_650_000.0,
                PropertyType::Residential,
                &["https://cdn.example.com/first.jpg", "https://cdn.example.com/second.jpg"],
            ),
        )
        .await
        .unwrap();
    fixture
        .service
        .create_home(realtor_id, new_home("Ottawa", 800_000.0, PropertyType::Condo, &[]))
        .await
        .unwrap();

    // City + lower price bound selects only the Toronto listing
    let filters = HomeFilters::new(Some("Toronto".to_string()), Some(1_500_000.0), None, None);
    let summaries = fixture.service.list_homes(&filters).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].city, "Toronto");
    assert_eq!(
        summaries[0].image.as_deref(),
        Some("https://cdn.example.com/first.jpg")
    );

    // Property type alone selects the Ottawa condo, which has no images
    let filters = HomeFilters::new(None, None, None, Some(PropertyType::Condo));
    let summaries = fixture.service.list_homes(&filters).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].city, "Ottawa");
    assert_eq!(summaries[0].image, None);

    // No filters lists everything
    let summaries = fixture
        .service
        .list_homes(&HomeFilters::default())
        .await
        .unwrap();
    assert_eq!(summaries.len(), 2);
}

#[tokio::test]
async fn list_homes_without_matches_is_empty_not_an_error() {
    let fixture = build_service();
    let filters = HomeFilters::new(Some("Nowhere".to_string()), None, None, None);
    let summaries = fixture.service.list_homes(&filters).await.unwrap();
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn get_home_missing_is_not_found() {
    let fixture = build_service();
    let err = fixture.service.get_home(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn update_home_applies_partial_changes() {
    let fixture = build_service();
    let home = fixture
        .service
        .create_home(
            Uuid::new_v4(),
            new_home("Toronto", 1_650_000.0, PropertyType::Residential, &[]),
        )
        .await
        .unwrap();

    let updated = fixture
        .service
        .update_home(
            home.id,
            HomeUpdate {
                price: Some(1_499_000.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, 1_499_000.0);
    assert_eq!(updated.address, home.address);
    assert_eq!(updated.realtor_id, home.realtor_id);
}

#[tokio::test]
async fn update_home_missing_is_not_found() {
    let fixture = build_service();
    let err = fixture
        .service
        .update_home(Uuid::new_v4(), HomeUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn delete_home_removes_home_and_images() {
    let fixture = build_service();
    let home = fixture
        .service
        .create_home(
            Uuid::new_v4(),
            new_home("Toronto", 1_650_000.0, PropertyType::Residential, &["https://cdn.example.com/a.jpg"]),
        )
        .await
        .unwrap();

    fixture.service.delete_home(home.id).await.unwrap();

    assert!(fixture.image_repository.images_for(home.id).await.is_empty());
    let err = fixture.service.get_home(home.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn delete_home_missing_is_not_found() {
    let fixture = build_service();
    let err = fixture
        .service
        .delete_home(Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn inquire_links_buyer_home_and_current_owner() {
    let fixture = build_service();
    let realtor_id = Uuid::new_v4();
    let buyer_id = Uuid::new_v4();
    let home = fixture
        .service
        .create_home(realtor_id, new_home("Toronto", 1_650_000.0, PropertyType::Residential, &[]))
        .await
        .unwrap();

    let message = fixture
        .service
        .inquire(buyer_id, home.id, "Is the property still available?".to_string())
        .await
        .unwrap();

    assert_eq!(message.buyer_id, buyer_id);
    assert_eq!(message.realtor_id, realtor_id);
    assert_eq!(message.home_id, home.id);
    assert_eq!(fixture.message_repository.count().await, 1);
}

#[tokio::test]
async fn inquire_about_missing_home_is_not_found() {
    let fixture = build_service();
    let err = fixture
        .service
        .inquire(Uuid::new_v4(), Uuid::new_v4(), "Hello?".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    assert_eq!(fixture.message_repository.count().await, 0);
}

#[tokio::test]
async fn messages_for_home_returns_only_that_homes_inquiries() {
    let fixture = build_service();
    let realtor_id = Uuid::new_v4();
    let buyer_id = Uuid::new_v4();

    let first = fixture
        .service
        .create_home(realtor_id, new_home("Toronto", 1_650_000.0, PropertyType::Residential, &[]))
        .await
        .unwrap();
    let second = fixture
        .service
        .create_home(realtor_id, new_home("Ottawa", 800_000.0, PropertyType::Condo, &[]))
        .await
        .unwrap();

    fixture
        .service
        .inquire(buyer_id, first.id, "About the first".to_string())
        .await
        .unwrap();
    fixture
        .service
        .inquire(buyer_id, second.id, "About the second".to_string())
        .await
        .unwrap();

    let messages = fixture.service.messages_for_home(first.id).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message, "About the first");
}

#[tokio::test]
async fn realtor_for_home_returns_owner_contact() {
    let fixture = build_service();
    let owner = realtor("Ada Realtor", "ada@example.com");
    let owner_id = owner.id;
    fixture.user_repository.insert(owner).await;

    let home = fixture
        .service
        .create_home(owner_id, new_home("Toronto", 1_650_000.0, PropertyType::Residential, &[]))
        .await
        .unwrap();

    let contact = fixture.service.realtor_for_home(home.id).await.unwrap();
    assert_eq!(contact.id, owner_id);
    assert_eq!(contact.email, "ada@example.com");
}

#[tokio::test]
async fn realtor_for_missing_home_is_not_found() {
    let fixture = build_service();
    let err = fixture
        .service
        .realtor_for_home(Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
