//! Serde helpers shared by the record types.

use bson::oid::ObjectId;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize an optional ObjectId as its 24-char hex form.
///
/// Only used on response paths; records are inserted without an `_id` so the
/// store generates one.
pub fn serialize_opt_oid_hex<S>(oid: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match oid {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}

/// Serialize an ObjectId as its 24-char hex form.
pub fn serialize_oid_hex<S>(oid: &ObjectId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&oid.to_hex())
}

/// Coerce an applicant count from whatever the client (or a legacy record)
/// holds: an integer, a double, a numeric string, or junk. Anything that is
/// not a usable number becomes 0.
pub fn deserialize_applicant_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(n) => n.max(0),
        // NaN and negatives collapse to 0; `as` saturates for finite values.
        Raw::Float(f) if f.is_finite() && f >= 0.0 => f as i64,
        Raw::Float(_) => 0,
        Raw::Text(s) => s.trim().parse::<i64>().unwrap_or(0).max(0),
        Raw::Other(_) => 0,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "super::deserialize_applicant_count")]
        count: i64,
    }

    fn parse(json: &str) -> i64 {
        serde_json::from_str::<Wrapper>(json).unwrap().count
    }

    #[test]
    fn accepts_integers() {
        assert_eq!(parse(r#"{"count": 7}"#), 7);
        assert_eq!(parse(r#"{"count": 0}"#), 0);
    }

    #[test]
    fn accepts_numeric_strings() {
        assert_eq!(parse(r#"{"count": "12"}"#), 12);
        assert_eq!(parse(r#"{"count": " 3 "}"#), 3);
    }

    #[test]
    fn junk_becomes_zero() {
        assert_eq!(parse(r#"{"count": "lots"}"#), 0);
        assert_eq!(parse(r#"{"count": null}"#), 0);
        assert_eq!(parse(r#"{"count": {"nested": true}}"#), 0);
        assert_eq!(parse(r#"{}"#), 0);
    }

    #[test]
    fn negatives_clamp_to_zero() {
        assert_eq!(parse(r#"{"count": -4}"#), 0);
        assert_eq!(parse(r#"{"count": "-9"}"#), 0);
    }

    #[test]
    fn doubles_truncate() {
        assert_eq!(parse(r#"{"count": 2.9}"#), 2);
    }
}
