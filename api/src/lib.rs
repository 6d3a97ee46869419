//! HTTP API layer for HomeQuest.
//!
//! Exposes the application factory, route handlers, request/response DTOs,
//! and the role-guard middleware. The binary in `main.rs` wires the MySQL
//! repositories from `hq_infra` into this surface; integration tests wire
//! the in-memory mocks from `hq_core` instead.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
