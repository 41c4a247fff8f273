//! JSON serialization via `serde_json`.
//!
//! Mapping keys are written in document order.

use crate::document::value::{Value, YamlNumber};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(YamlNumber::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(YamlNumber::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, child) in entries {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
        }
    }
}

/// Encodes `value` as JSON, compact or with two-space indentation.
pub fn to_json(value: &Value, pretty: bool) -> serde_json::Result<Vec<u8>> {
    if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::decoder::decode_str;

    fn compact(value: &Value) -> String {
        String::from_utf8(to_json(value, false).unwrap()).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(compact(&Value::Null), "null");
        assert_eq!(compact(&Value::from(42)), "42");
        assert_eq!(compact(&Value::from(1.5)), "1.5");
        assert_eq!(compact(&Value::from("a\"b")), r#""a\"b""#);
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(compact(&Value::from(f64::NAN)), "null");
    }

    #[test]
    fn test_mapping_keeps_document_order() {
        let doc = decode_str("b: 1\na: [true, ~]\n").unwrap().unwrap();
        assert_eq!(compact(&doc), r#"{"b":1,"a":[true,null]}"#);
    }

    #[test]
    fn test_pretty() {
        let doc = decode_str("a: 1\n").unwrap().unwrap();
        let pretty = String::from_utf8(to_json(&doc, true).unwrap()).unwrap();
        assert_eq!(pretty, "{\n  \"a\": 1\n}");
    }
}
