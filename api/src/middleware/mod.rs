//! HTTP middleware
//!
//! - `auth`: per-route role guard and the authenticated-user extractor
//! - `cors`: environment-aware CORS configuration

pub mod auth;
pub mod cors;
