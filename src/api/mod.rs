//! API Boundary
//!
//! Typed HTTP client and the payload types it produces.

pub mod client;
pub mod types;

pub use client::ApiError;
