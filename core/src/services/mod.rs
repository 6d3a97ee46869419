//! Business services.

pub mod auth;
pub mod home;
pub mod token;

pub use auth::{AuthService, SignupData};
pub use home::{HomeService, NewHome};
pub use token::TokenService;
