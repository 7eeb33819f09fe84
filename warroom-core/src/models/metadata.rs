//! Extensible payloads attached to records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form key/value bag carried by every record.
pub type Metadata = BTreeMap<String, MetaValue>;

/// A metadata value. Deliberately closed: nested objects are not allowed,
/// anything richer belongs in an [`OpaqueJson`] field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<MetaValue>),
}

impl MetaValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for MetaValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<MetaValue>> From<Vec<T>> for MetaValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// JSON stored as-is and only interpreted at the serialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpaqueJson(pub serde_json::Value);

impl Default for OpaqueJson {
    fn default() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }
}

impl From<serde_json::Value> for OpaqueJson {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_accepts_scalars_and_lists() {
        let json = r#"{"source":"ghl","score":42,"vip":true,"tags":["a","b"]}"#;
        let meta: Metadata = serde_json::from_str(json).unwrap();

        assert_eq!(meta["source"].as_text(), Some("ghl"));
        assert_eq!(meta["score"].as_number(), Some(42.0));
        assert_eq!(meta["vip"], MetaValue::Bool(true));
        assert_eq!(meta["tags"], MetaValue::from(vec!["a", "b"]));
    }

    #[test]
    fn metadata_rejects_nested_objects() {
        let json = r#"{"nested":{"a":1}}"#;
        assert!(serde_json::from_str::<Metadata>(json).is_err());
    }

    #[test]
    fn opaque_json_defaults_to_empty_object() {
        assert_eq!(OpaqueJson::default().0, serde_json::json!({}));
    }
}
