//! Domain entities.

pub mod home;
pub mod message;
pub mod token;
pub mod user;

pub use home::{Home, HomeUpdate, Image, PropertyType};
pub use message::Message;
pub use token::Claims;
pub use user::{User, UserRole};
