//! Shared data models for the JobNest backend.
//!
//! This crate provides Serde-serializable types for:
//! - Job postings and their projected read form
//! - Job application records
//! - Request payloads with field validation
//!
//! Field names follow the wire contract (camelCase, `_id` for identifiers)
//! so the same types round-trip through both BSON storage and JSON responses.

pub mod application;
pub mod job;
mod serde_util;

pub use application::{Application, ApplyRequest};
pub use job::{Job, JobPayload, JobSummary};
