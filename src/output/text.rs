//! Debug-style text rendering.
//!
//! The format is meant for people reading a terminal, not for parsing:
//!
//! - `Null` renders as `<nil>`
//! - booleans, numbers and strings render as their literal text (strings unquoted)
//! - sequences render as `[a b c]`
//! - mappings render as `map[k1:v1 k2:v2]` with keys sorted by byte order
//!
//! # Example
//!
//! ```
//! use twofy::document::decoder::decode_str;
//! use twofy::output::text::render;
//!
//! let doc = decode_str("b: [1, 2]\na: ~\n").unwrap().unwrap();
//! assert_eq!(render(&doc), "map[a:<nil> b:[1 2]]\n");
//! ```

use crate::document::value::Value;

/// Renders `value` on one line followed by a newline.
pub fn render(value: &Value) -> String {
    let mut out = render_value(value);
    out.push('\n');
    out
}

/// Renders `value` without the trailing newline.
pub fn render_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("<nil>"),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(s),
        Value::Sequence(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Mapping(entries) => {
            let mut sorted: Vec<(&String, &Value)> = entries.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));

            out.push_str("map[");
            for (i, (key, child)) in sorted.into_iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(key);
                out.push(':');
                write_value(out, child);
            }
            out.push(']');
        }
    }
}
