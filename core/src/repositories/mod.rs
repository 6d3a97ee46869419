pub mod home;
pub mod image;
pub mod message;
pub mod user;

pub use home::{HomeRepository, MockHomeRepository};
pub use image::{ImageRepository, MockImageRepository};
pub use message::{MessageRepository, MockMessageRepository};
pub use user::{MockUserRepository, UserRepository};
