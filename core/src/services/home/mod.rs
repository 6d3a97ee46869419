//! Home listings: CRUD and buyer inquiries.

pub mod service;

#[cfg(test)]
mod tests;

pub use service::{HomeService, NewHome};
