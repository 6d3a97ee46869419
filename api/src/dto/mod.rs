//! Request and response DTOs
//!
//! Wire-level types with camelCase field names and `validator` rules.
//! Domain entities never cross the HTTP boundary directly.

pub mod auth;
pub mod home;
