//! Value objects: filters and read-side projections.

pub mod home_filter;
pub mod home_listing;

pub use home_filter::{HomeFilters, PriceRange};
pub use home_listing::{HomeSummary, RealtorContact};
