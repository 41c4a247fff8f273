//! Error types for YAMLPath parsing and evaluation.

use thiserror::Error;

/// Low-level parse failures, reported by [`super::Parser`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YamlPathError {
    /// Unexpected token at a specific position.
    #[error("unexpected token '{found}' at position {position}, expected {expected}")]
    UnexpectedToken {
        position: usize,
        found: String,
        expected: String,
    },
    /// Unexpected end of input.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: String },
    /// Invalid syntax with description.
    #[error("{message}")]
    InvalidSyntax { message: String },
}

/// Errors surfaced to callers of [`super::evaluate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The query text could not be parsed.
    #[error("invalid jsonpath {query:?}: {cause}")]
    Syntax { query: String, cause: YamlPathError },

    /// Walking the document failed.
    ///
    /// `value` holds the text rendering of the value being walked when the
    /// fault happened.
    #[error("error executing jsonpath {query:?}: {cause}")]
    Evaluation {
        query: String,
        value: String,
        cause: String,
    },
}

impl QueryError {
    /// The query text that triggered this error.
    pub fn query(&self) -> &str {
        match self {
            QueryError::Syntax { query, .. } | QueryError::Evaluation { query, .. } => query,
        }
    }
}
