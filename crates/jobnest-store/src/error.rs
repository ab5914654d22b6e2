//! Store error types.

use bson::oid::ObjectId;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Invalid id format: {0}")]
    InvalidId(String),

    #[error("Driver error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] bson::de::Error),
}

impl StoreError {
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId(id.into())
    }
}

/// Parse a client-supplied identifier into the store's native form.
///
/// Anything that is not a well-formed 24-char hex ObjectId fails with
/// [`StoreError::InvalidId`] so handlers can reject it before touching the
/// store.
pub fn parse_object_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::invalid_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_ids() {
        let oid = parse_object_id("665f1f77bcf86cd799439011").unwrap();
        assert_eq!(oid.to_hex(), "665f1f77bcf86cd799439011");
    }

    #[test]
    fn rejects_malformed_ids() {
        for bad in ["", "short", "zzzf1f77bcf86cd799439011", "665f1f77bcf86cd7994390112"] {
            assert!(matches!(
                parse_object_id(bad),
                Err(StoreError::InvalidId(_))
            ));
        }
    }
}
