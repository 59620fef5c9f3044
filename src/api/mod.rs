//! API Layer
//!
//! Typed wire contracts and the HTTP client for the WaBulk REST API.

pub mod client;
pub mod types;

pub use client::*;
pub use types::*;
