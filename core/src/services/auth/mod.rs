//! Authentication: signup, signin, and product-key issuance.

pub mod password;
pub mod product_key;
pub mod service;


pub use service::{AuthService, SignupData};
