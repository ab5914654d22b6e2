//! Write acknowledgments returned to API clients.
//!
//! Shaped after the driver's result types but owned here so the wire format
//! stays stable across driver upgrades.

use serde::Serialize;

/// Acknowledgment of a single-document insert.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    /// Hex form of the store-generated identifier.
    pub inserted_id: String,
}

/// Acknowledgment of a single-document update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Acknowledgment of a single-document delete. `deleted_count` is 0 when
/// nothing matched; that is not an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acks_use_camel_case() {
        let ack = InsertAck {
            acknowledged: true,
            inserted_id: "665f1f77bcf86cd799439011".into(),
        };
        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(value["insertedId"], serde_json::json!("665f1f77bcf86cd799439011"));

        let ack = DeleteAck { acknowledged: true, deleted_count: 0 };
        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(value["deletedCount"], serde_json::json!(0));
    }
}
