//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints including:
//! - Account signup (role chosen by path segment)
//! - Email/password signin
//! - Product key generation for realtor and admin signup
//! - Current-user lookup

pub mod me;
pub mod product_key;
pub mod signin;
pub mod signup;
