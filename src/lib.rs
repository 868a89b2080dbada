//! pkg-readme-server - npm package README, metadata and search tools
//!
//! Exposes three callable operations over HTTP, backed by the public npm
//! registry (with GitHub as a README fallback) and an in-memory response
//! cache with TTL expiration and LRU-on-overflow eviction.

pub mod api;
pub mod cache;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod readme;
pub mod tasks;
pub mod tools;
pub mod validate;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{Result, ServerError};
