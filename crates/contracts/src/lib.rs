//! Shared contracts between the admin frontend and the school backend.
//!
//! Every type here mirrors what the REST backend actually sends or expects;
//! field names are serde-renamed to the backend's camelCase/Mongo conventions.
//! The backend owns validation and persistence, so most fields are plain
//! strings with lenient `#[serde(default)]` handling.

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod domain;
