//! Home repository interface for persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::home::Home;
use crate::domain::value_objects::{HomeFilters, HomeSummary, RealtorContact};
use crate::errors::DomainResult;

/// Repository interface for home persistence and listing queries.
#[async_trait]
pub trait HomeRepository: Send + Sync {
    /// Lists homes matching the given filters as summary rows.
    ///
    /// Each summary carries the home's first associated image URL (or none).
    /// An empty result is not an error.
    async fn find_many(&self, filters: &HomeFilters) -> DomainResult<Vec<HomeSummary>>;

    /// Finds a home by unique id.
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Home>>;

    /// Persists a new home and returns the stored entity.
    async fn create(&self, home: &Home) -> DomainResult<Home>;

    /// Writes the mutable columns of an existing home.
    ///
    /// Fails with `NotFound` when no row has the home's id.
    async fn update(&self, home: &Home) -> DomainResult<Home>;

    /// Deletes a home row. Returns `true` when a row was removed.
    /// Associated images are deleted separately, before this call.
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;

    /// Looks up the contact projection of a home's owning realtor.
    ///
    /// Returns `Ok(None)` when the home does not exist.
    async fn realtor_by_home_id(&self, home_id: Uuid) -> DomainResult<Option<RealtorContact>>;
}
