//! HTTP handlers, one module per resource.

pub mod applications;
pub mod auth;
pub mod content;
pub mod health;
pub mod jobs;
