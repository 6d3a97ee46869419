//! JWT issuance and verification.

pub mod service;

pub use service::TokenService;
