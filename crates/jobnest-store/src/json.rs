//! Relaxed BSON-to-JSON rendering.
//!
//! Opaque documents (sliders, feedback) go out as plain JSON: ObjectIds as
//! hex strings, datetimes as RFC3339, numbers as numbers. The driver's
//! extended-JSON forms (`{"$oid": …}`) never reach clients.

use bson::{Bson, Document};
use serde_json::{Map, Value};

/// Convert a document to a plain JSON object.
pub fn document_to_json(doc: Document) -> Value {
    let mut map = Map::with_capacity(doc.len());
    for (key, value) in doc {
        map.insert(key, bson_to_json(value));
    }
    Value::Object(map)
}

/// Convert a single BSON value to plain JSON.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(n) => Value::from(n),
        Bson::Int64(n) => Value::from(n),
        Bson::Double(f) => serde_json::Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        Bson::String(s) => Value::String(s),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or(Value::Null),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::Document(doc) => document_to_json(doc),
        // Rare wire types (Decimal128, Timestamp, Binary, …) keep their
        // relaxed extended-JSON shape rather than being dropped.
        other => other.into_relaxed_extjson(),
    }
}
