//! Axum HTTP API server.
//!
//! This crate provides:
//! - REST endpoints for job postings, applications, and promotional content
//! - Session cookie issuing and verification
//! - CORS with a fixed front-end allow-list and credentials

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
