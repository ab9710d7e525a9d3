//! Lenient decoding helpers for backend JSON.
//!
//! The backend is not consistent about field names or value types, so records are first
//! decoded into loose `serde_json::Value`s and then normalized by the helpers below.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

/// A list response: a bare array, `{ "data": [...] }` or `{ "godowns": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    /// `[...]`
    Bare(Vec<T>),
    /// `{ "data": [...] }`
    Data {
        /// Wrapped items
        data: Vec<T>,
    },
    /// `{ "godowns": [...] }`
    Godowns {
        /// Wrapped items
        godowns: Vec<T>,
    },
}

impl<T> ListResponse<T> {
    /// Unwraps the items regardless of envelope shape.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Data { data: items } | Self::Godowns { godowns: items } => {
                items
            }
        }
    }
}

/// A single-item response: bare or `{ "data": {...} }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemResponse<T> {
    /// `{ "data": {...} }`
    Data {
        /// Wrapped item
        data: T,
    },
    /// `{...}`
    Bare(T),
}

impl<T> ItemResponse<T> {
    /// Unwraps the item regardless of envelope shape.
    pub fn into_item(self) -> T {
        match self {
            Self::Data { data } | Self::Bare(data) => data,
        }
    }
}

/// Picks the canonical identifier from `_id` and `id`.
///
/// Strings and integers are accepted, as is Mongo's `{ "$oid": "..." }` form.
pub(crate) fn canonical_id(mongo_id: Option<&Value>, id: Option<&Value>) -> Option<String> {
    mongo_id
        .and_then(id_text)
        .or_else(|| id.and_then(id_text))
}

pub(crate) fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get("$oid")
            .or_else(|| map.get("_id"))
            .or_else(|| map.get("id"))
            .and_then(id_text),
        _ => None,
    }
}

/// Coerces a loose value to a stock quantity.
///
/// Numbers are truncated and clamped at zero, numeric strings are parsed the same way,
/// everything else counts as zero.
#[must_use]
pub fn coerce_quantity(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or_else(|| clamp(n.as_f64())),
        Some(Value::String(s)) => clamp(s.trim().parse::<f64>().ok()),
        _ => 0,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp(value: Option<f64>) -> u64 {
    match value {
        Some(v) if v.is_finite() && v >= 1.0 => v.trunc() as u64,
        _ => 0,
    }
}

/// Reads an optional free-text attribute. Blank strings become `None`.
pub(crate) fn text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a timestamp given either as RFC 3339 text or as epoch milliseconds.
pub(crate) fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_quantity_follows_number_coercion() {
        assert_eq!(coerce_quantity(Some(&json!(7))), 7);
        assert_eq!(coerce_quantity(Some(&json!("12"))), 12);
        assert_eq!(coerce_quantity(Some(&json!(" 4 "))), 4);
        assert_eq!(coerce_quantity(Some(&json!(3.9))), 3);
        assert_eq!(coerce_quantity(Some(&json!(-2))), 0);
        assert_eq!(coerce_quantity(Some(&json!("lots"))), 0);
        assert_eq!(coerce_quantity(Some(&json!(""))), 0);
        assert_eq!(coerce_quantity(Some(&json!(null))), 0);
        assert_eq!(coerce_quantity(Some(&json!(true))), 0);
        assert_eq!(coerce_quantity(None), 0);
    }

    #[test]
    fn test_canonical_id_prefers_mongo_id() {
        let mongo = json!("abc123");
        let plain = json!("xyz");
        assert_eq!(
            canonical_id(Some(&mongo), Some(&plain)).as_deref(),
            Some("abc123")
        );
        assert_eq!(canonical_id(None, Some(&plain)).as_deref(), Some("xyz"));
        assert_eq!(canonical_id(None, Some(&json!(42))).as_deref(), Some("42"));
        assert_eq!(
            canonical_id(Some(&json!({"$oid": "651f"})), None).as_deref(),
            Some("651f")
        );
        assert_eq!(canonical_id(Some(&json!("")), None), None);
    }

    #[test]
    fn test_list_response_shapes() {
        let bare: ListResponse<u32> = serde_json::from_value(json!([1, 2])).unwrap();
        assert_eq!(bare.into_items(), vec![1, 2]);

        let data: ListResponse<u32> = serde_json::from_value(json!({"data": [3]})).unwrap();
        assert_eq!(data.into_items(), vec![3]);

        let godowns: ListResponse<u32> =
            serde_json::from_value(json!({"godowns": [4, 5]})).unwrap();
        assert_eq!(godowns.into_items(), vec![4, 5]);
    }

    #[test]
    fn test_timestamp_formats() {
        let iso = timestamp(Some(&json!("2024-05-01T10:00:00Z"))).unwrap();
        assert_eq!(iso.timestamp(), 1_714_557_600);

        let millis = timestamp(Some(&json!(1_714_557_600_000_i64))).unwrap();
        assert_eq!(millis, iso);

        assert!(timestamp(Some(&json!("yesterday"))).is_none());
    }
}
