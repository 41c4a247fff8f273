//! twofy - convert YAML to a text rendering or JSON.
//!
//! A run reads one YAML document, optionally narrows it with a path query,
//! collapses the matches into a single value and serializes that value.
//!
//! ```
//! use twofy::convert::convert_bytes;
//! use twofy::output::OutputFormat;
//!
//! let out = convert_bytes(b"foo: 42\n", "{.foo}", OutputFormat::Json, false).unwrap();
//! assert_eq!(out, b"42");
//! ```

pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod file;
pub mod output;
pub mod yamlpath;

pub use config::{Config, RunConfig};
pub use document::Value;
pub use error::{Error, Result};
pub use output::OutputFormat;
