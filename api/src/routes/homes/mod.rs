//! Home listing route handlers
//!
//! This module contains the listing endpoints:
//! - Public browsing (filterable list and per-home detail)
//! - Realtor-only listing management (create, update, delete)
//! - Buyer inquiries and the owning realtor's message feed
//!
//! Role checks run in the `RequireRoles` guard before these handlers;
//! ownership checks against the addressed home happen here.

pub mod create;
pub mod delete;
pub mod detail;
pub mod inquire;
pub mod list;
pub mod messages;
pub mod update;
