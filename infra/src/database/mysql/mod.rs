//! MySQL repository implementations
//!
//! Concrete SQLx-backed implementations of the repository traits declared in
//! `hq_core::repositories`. All id columns are CHAR(36) UUID strings.

pub mod home_repository_impl;
pub mod image_repository_impl;
pub mod message_repository_impl;
pub mod user_repository_impl;

pub use home_repository_impl::MySqlHomeRepository;
pub use image_repository_impl::MySqlImageRepository;
pub use message_repository_impl::MySqlMessageRepository;
pub use user_repository_impl::MySqlUserRepository;
