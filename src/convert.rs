//! The conversion pipeline.
//!
//! read → decode → evaluate → shape → serialize → write. The same evaluator
//! and shaper serve both output formats.

use crate::config::RunConfig;
use crate::document::decoder;
use crate::document::value::Value;
use crate::error::{QueryError, Result};
use crate::file::{read_input, write_output};
use crate::output::{self, OutputFormat};
use crate::yamlpath;

/// Collapses a match list into the value to print.
///
/// - no matches ⇒ `None`
/// - one match ⇒ that value
/// - several ⇒ a sequence of the matches, in order
pub fn shape(matches: Vec<&Value>) -> Option<Value> {
    match matches.len() {
        0 => None,
        1 => matches.into_iter().next().cloned(),
        _ => Some(Value::Sequence(matches.into_iter().cloned().collect())),
    }
}

/// Decodes `input`, applies `query` and returns the shaped result.
///
/// `Ok(None)` means there is nothing to print: the stream held no document,
/// or the query matched nothing.
pub fn extract(input: &[u8], query: &str) -> Result<Option<Value>> {
    let Some(root) = decoder::decode(input)? else {
        tracing::debug!("input holds no document");
        return Ok(None);
    };

    let matches = yamlpath::evaluate(&root, query).map_err(|err| {
        if let QueryError::Evaluation {
            query,
            value,
            cause,
        } = &err
        {
            tracing::debug!(
                "Error executing template: {}. Printing more information for debugging the template:\n\
                 \ttemplate was:\n\t\t{}\n\
                 \tobject given to jsonpath engine was:\n\t\t{}\n",
                cause,
                query,
                value
            );
        }
        err
    })?;
    tracing::debug!(matches = matches.len(), "evaluated jsonpath");

    Ok(shape(matches))
}

/// Converts `input` into the bytes to emit, without touching any I/O.
pub fn convert_bytes(
    input: &[u8],
    query: &str,
    format: OutputFormat,
    pretty: bool,
) -> Result<Vec<u8>> {
    let shaped = extract(input, query)?;
    let bytes = output::serialize(shaped.as_ref(), format, pretty)?;
    Ok(bytes)
}

/// Runs one conversion as described by `config`.
///
/// The output is serialized in full before anything is written.
pub fn run(config: &RunConfig) -> Result<()> {
    let input = read_input(config.input.as_deref())?;
    let bytes = convert_bytes(&input, &config.query, config.format, config.pretty)?;
    write_output(config.output.as_deref(), &bytes)?;
    Ok(())
}
