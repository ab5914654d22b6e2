//! MongoDB document store adapter.
//!
//! This crate provides:
//! - A configured client holding the four named collections
//! - Typed repositories for jobs, applications, and promotional content
//! - Identifier parsing with a distinct invalid-id error
//! - Relaxed BSON-to-JSON rendering for opaque documents
//!
//! Connectivity and query failures propagate as [`StoreError`] with no
//! retries; callers decide how to surface them.

pub mod ack;
pub mod applications;
pub mod client;
pub mod content;
pub mod error;
pub mod jobs;
pub mod json;

pub use ack::{DeleteAck, InsertAck, UpdateAck};
pub use applications::{ApplicationFilter, ApplicationRepository};
pub use client::{StoreClient, StoreConfig};
pub use content::ContentRepository;
pub use error::{parse_object_id, StoreError, StoreResult};
pub use jobs::{JobFilter, JobRepository};
