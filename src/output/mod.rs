//! Serializers for shaped results.

pub mod json;
pub mod text;

use crate::document::value::Value;

/// Output encoding selected by the subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Debug-style single-line rendering (`yaml2txt`).
    Text,
    /// JSON (`yaml2json`).
    Json,
}

/// Serializes a shaped result.
///
/// `None` means nothing matched and always produces zero bytes.
pub fn serialize(
    value: Option<&Value>,
    format: OutputFormat,
    pretty: bool,
) -> serde_json::Result<Vec<u8>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    match format {
        OutputFormat::Text => Ok(text::render(value).into_bytes()),
        OutputFormat::Json => json::to_json(value, pretty),
    }
}
