//! Generic value model for decoded YAML documents.
//!
//! Every stage of the conversion pipeline works on this one tagged type: the
//! decoder produces it, the path evaluator walks it, and both serializers
//! consume it.
//!
//! # Example
//!
//! ```
//! use twofy::document::value::{Value, YamlNumber};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), Value::String("twofy".to_string()));
//! map.insert("version".to_string(), Value::Number(YamlNumber::Integer(1)));
//! let doc = Value::Mapping(map);
//!
//! assert_eq!(doc.get("version"), Some(&Value::Number(YamlNumber::Integer(1))));
//! assert!(doc.get("missing").is_none());
//! ```

use indexmap::IndexMap;

/// Represents YAML numbers (integer or float)
#[derive(Debug, Clone, PartialEq)]
pub enum YamlNumber {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for YamlNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YamlNumber::Integer(i) => write!(f, "{}", i),
            YamlNumber::Float(fl) if fl.is_nan() => write!(f, "NaN"),
            YamlNumber::Float(fl) if fl.is_infinite() => {
                write!(f, "{}", if *fl > 0.0 { "+Inf" } else { "-Inf" })
            }
            YamlNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl YamlNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            YamlNumber::Integer(i) => *i as f64,
            YamlNumber::Float(f) => *f,
        }
    }
}

/// A decoded YAML value.
///
/// Mappings keep their keys in document order. Keys are always strings; the
/// decoder stringifies scalar keys such as `1` or `true`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(YamlNumber),
    String(String),
    Sequence(Vec<Value>),
    Mapping(IndexMap<String, Value>),
}

impl Value {
    /// Looks up `key` when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(entries) => entries.get(key),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(YamlNumber::Integer(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(YamlNumber::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().collect())
    }
}
