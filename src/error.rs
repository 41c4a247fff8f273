//! Error types for the conversion pipeline.
//!
//! Every failure is fatal to the run: the CLI reports it once and exits
//! non-zero. Nothing is retried.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use crate::yamlpath::error::QueryError;

/// Failures while obtaining the raw input bytes.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open input file {}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot read input")]
    Read { source: io::Error },

    /// No `--input` was given and stdin is an interactive terminal.
    #[error("expected a pipe on stdin (or use --input <path>)")]
    NotPiped,

    #[error("cannot decompress gzipped input")]
    Decompress { source: io::Error },
}

/// Failures while turning input bytes into a [`crate::Value`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid YAML: {message}")]
    Syntax { message: String },

    #[error("input is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("expected a single YAML document, found {count}")]
    MultipleDocuments { count: usize },

    #[error("unsupported mapping key: {key}")]
    UnsupportedKey { key: String },

    #[error("unsupported YAML node: {kind}")]
    Unsupported { kind: String },
}

impl From<yaml_rust2::ScanError> for DecodeError {
    fn from(err: yaml_rust2::ScanError) -> Self {
        DecodeError::Syntax {
            message: err.to_string(),
        }
    }
}

/// Failures while delivering the serialized bytes.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot write output file {}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("short write to stdout: wrote {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    #[error("cannot write to stdout")]
    Stdout { source: io::Error },
}

/// Any error that ends a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("cannot serialize JSON")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
