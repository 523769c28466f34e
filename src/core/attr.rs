//! Key/value attributes attached to log events
//!
//! This module provides:
//! - `FieldValue`: the typed value of an attribute
//! - `Attr`: a key/value pair as supplied by a caller
//! - `RecordAttr`: an attribute tagged with the group path active when it was attached

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

impl FieldValue {
    /// Null and the empty string count as empty
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u16> for FieldValue {
    fn from(i: u16) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// A key/value attribute as supplied with an event or a derived handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attr {
    pub key: String,
    pub value: FieldValue,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// An attribute with no key and no value carries nothing and is skipped
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> From<(K, V)> for Attr {
    fn from((key, value): (K, V)) -> Self {
        Attr::new(key, value)
    }
}

/// An attribute bound to the group path that was active when it was attached
#[derive(Debug, Clone, PartialEq)]
pub struct RecordAttr {
    pub groups: Arc<[String]>,
    pub key: String,
    pub value: FieldValue,
}

impl RecordAttr {
    pub fn new(groups: Arc<[String]>, attr: Attr) -> Self {
        Self {
            groups,
            key: attr.key,
            value: attr.value,
        }
    }

    /// Attribute outside any group
    pub fn ungrouped(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            groups: Arc::from(Vec::new()),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Group segments and key joined by `.`, e.g. `db.conn.host`
    pub fn qualified_key(&self) -> String {
        let mut out = String::new();
        for group in self.groups.iter() {
            out.push_str(group);
            out.push('.');
        }
        out.push_str(&self.key);
        out
    }
}

impl fmt::Display for RecordAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.qualified_key(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(names: &[&str]) -> Arc<[String]> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from("abc").to_string(), "abc");
        assert_eq!(FieldValue::from(8080_u16).to_string(), "8080");
        assert_eq!(FieldValue::from(1.5).to_string(), "1.5");
        assert_eq!(FieldValue::from(true).to_string(), "true");
        assert_eq!(FieldValue::Null.to_string(), "null");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some(3)), FieldValue::Int(3));
    }

    #[test]
    fn test_empty_attr() {
        assert!(Attr::new("", FieldValue::Null).is_empty());
        assert!(Attr::new("", "").is_empty());
        assert!(!Attr::new("key", FieldValue::Null).is_empty());
        assert!(!Attr::new("", 0).is_empty());
    }

    #[test]
    fn test_qualified_key() {
        let attr = RecordAttr::new(groups(&["db", "conn"]), Attr::new("host", "localhost"));
        assert_eq!(attr.qualified_key(), "db.conn.host");
        assert_eq!(attr.to_string(), "db.conn.host=localhost");

        let attr = RecordAttr::ungrouped("port", 8080);
        assert_eq!(attr.qualified_key(), "port");
        assert_eq!(attr.to_string(), "port=8080");
    }

    #[test]
    fn test_attr_from_tuple() {
        let attr: Attr = ("user", "alice").into();
        assert_eq!(attr, Attr::new("user", "alice"));
    }
}
