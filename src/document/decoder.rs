//! YAML decoding into the generic [`Value`] model.
//!
//! Decoding is delegated to the `yaml-rust2` loader, which also resolves
//! anchors and aliases. This module only maps the loader's node type onto
//! [`Value`] and enforces the single-document rule.
//!
//! # Example
//!
//! ```
//! use twofy::document::decoder::decode_str;
//! use twofy::document::value::Value;
//!
//! let value = decode_str("name: Alice\nage: 30\n").unwrap().unwrap();
//! assert_eq!(value.get("name"), Some(&Value::String("Alice".to_string())));
//!
//! // An empty stream holds no document at all.
//! assert!(decode_str("").unwrap().is_none());
//! ```

use super::value::{Value, YamlNumber};
use crate::error::DecodeError;
use indexmap::IndexMap;
use yaml_rust2::{Yaml, YamlLoader};

/// Decodes raw input bytes.
///
/// Returns `Ok(None)` when the stream contains no document.
pub fn decode(bytes: &[u8]) -> Result<Option<Value>, DecodeError> {
    let text = String::from_utf8(bytes.to_vec())?;
    decode_str(&text)
}

/// Decodes a YAML string.
///
/// # Errors
///
/// Returns an error if:
/// - The text is not valid YAML
/// - The stream holds more than one document
/// - A mapping uses a sequence or mapping as a key
pub fn decode_str(text: &str) -> Result<Option<Value>, DecodeError> {
    let mut docs = YamlLoader::load_from_str(text)?;
    tracing::debug!(documents = docs.len(), "loaded YAML stream");

    match docs.len() {
        0 => Ok(None),
        1 => convert(docs.remove(0)).map(Some),
        count => Err(DecodeError::MultipleDocuments { count }),
    }
}

fn convert(yaml: Yaml) -> Result<Value, DecodeError> {
    let value = match yaml {
        Yaml::Null => Value::Null,
        Yaml::Boolean(b) => Value::Boolean(b),
        Yaml::Integer(i) => Value::Number(YamlNumber::Integer(i)),
        real @ Yaml::Real(_) => match real.as_f64() {
            Some(f) => Value::Number(YamlNumber::Float(f)),
            None => {
                return Err(DecodeError::Unsupported {
                    kind: format!("malformed float {:?}", real),
                })
            }
        },
        Yaml::String(s) => Value::String(s),
        Yaml::Array(items) => Value::Sequence(
            items
                .into_iter()
                .map(convert)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Hash(hash) => {
            let mut entries = IndexMap::with_capacity(hash.len());
            for (key, child) in hash {
                entries.insert(key_to_string(key)?, convert(child)?);
            }
            Value::Mapping(entries)
        }
        other => {
            return Err(DecodeError::Unsupported {
                kind: format!("{:?}", other),
            })
        }
    };
    Ok(value)
}

/// Stringifies a scalar mapping key the way a YAML-to-JSON converter does.
fn key_to_string(key: Yaml) -> Result<String, DecodeError> {
    match key {
        Yaml::String(s) => Ok(s),
        real @ Yaml::Real(_) => match real.as_f64() {
            // Same spelling as a float value, so `1.50` and `1e3` key as "1.5" and "1000".
            Some(f) => Ok(YamlNumber::Float(f).to_string()),
            None => Err(DecodeError::UnsupportedKey {
                key: format!("{:?}", real),
            }),
        },
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Boolean(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        other => Err(DecodeError::UnsupportedKey {
            key: format!("{:?}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_scalars() {
        let value = decode_str("a: 1\nb: 2.5\nc: true\nd: ~\ne: text\n")
            .unwrap()
            .unwrap();
        assert_eq!(value.get("a"), Some(&Value::Number(YamlNumber::Integer(1))));
        assert_eq!(value.get("b"), Some(&Value::Number(YamlNumber::Float(2.5))));
        assert_eq!(value.get("c"), Some(&Value::Boolean(true)));
        assert_eq!(value.get("d"), Some(&Value::Null));
        assert_eq!(value.get("e"), Some(&Value::String("text".to_string())));
    }

    #[test]
    fn test_decode_preserves_key_order() {
        let value = decode_str("zeta: 1\nalpha: 2\nmid: 3\n").unwrap().unwrap();
        match value {
            Value::Mapping(entries) => {
                let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
            }
            _ => panic!("Expected mapping"),
        }
    }

    #[test]
    fn test_decode_empty_stream() {
        assert!(decode_str("").unwrap().is_none());
        assert!(decode_str("# only a comment\n").unwrap().is_none());
    }

    #[test]
    fn test_decode_explicit_null_document() {
        assert_eq!(decode_str("null\n").unwrap(), Some(Value::Null));
    }

    #[test]
    fn test_decode_rejects_multiple_documents() {
        let err = decode_str("a: 1\n---\nb: 2\n").unwrap_err();
        assert!(matches!(err, DecodeError::MultipleDocuments { count: 2 }));
    }

    #[test]
    fn test_decode_syntax_error() {
        let err = decode_str("a: [1, 2\n").unwrap_err();
        assert!(matches!(err, DecodeError::Syntax { .. }));
    }

    #[test]
    fn test_decode_float_keys_use_value_spelling() {
        let value = decode_str("1.50: a\n1e3: b\n").unwrap().unwrap();
        assert_eq!(value.get("1.5"), Some(&Value::String("a".to_string())));
        assert_eq!(value.get("1000"), Some(&Value::String("b".to_string())));
        assert!(value.get("1.50").is_none());
    }

    #[test]
    fn test_decode_stringifies_scalar_keys() {
        let value = decode_str("1: one\ntrue: yes\n").unwrap().unwrap();
        assert_eq!(value.get("1"), Some(&Value::String("one".to_string())));
        assert_eq!(value.get("true"), Some(&Value::String("yes".to_string())));
    }

    #[test]
    fn test_decode_rejects_complex_key() {
        let err = decode_str("? [a, b]\n: value\n").unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedKey { .. }));
    }

    #[test]
    fn test_decode_resolves_aliases() {
        let value = decode_str("base: &b\n  x: 1\ncopy: *b\n").unwrap().unwrap();
        assert_eq!(value.get("copy"), value.get("base"));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let err = decode(&[0x61, 0x3a, 0x20, 0xff]).unwrap_err();
        assert!(matches!(err, DecodeError::Utf8(_)));
    }
}
