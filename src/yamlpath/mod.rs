//! YAMLPath query parser and evaluator.
//!
//! Selects sub-values of a decoded document by structure.
//!
//! # Supported Syntax
//!
//! - `$`, `@` or nothing - Current value (the marker is optional)
//! - `{ ... }` - kubectl-style template braces around a path
//! - `.property` - Named property access
//! - `['property']` - Bracket notation
//! - `[index]` - Array index (supports negative indices)
//! - `[*]` or `.*` - All children (wildcard)
//! - `..property` or `..*` - Recursive descent
//! - `[start:end]` - Array slicing
//! - `['prop1','prop2']` - Multiple properties
//!
//! # Examples
//!
//! ```
//! use twofy::document::decoder::decode_str;
//! use twofy::yamlpath::evaluate;
//!
//! let doc = decode_str("store:\n  book:\n    - author: A\n    - author: B\n")
//!     .unwrap()
//!     .unwrap();
//! let authors = evaluate(&doc, "{.store.book[*].author}").unwrap();
//! assert_eq!(authors.len(), 2);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{PathSegment, YamlPath};
pub use error::{QueryError, YamlPathError};
pub use evaluator::{EvalFault, Evaluator};
pub use parser::Parser;

use crate::document::value::Value;

/// Parses `query` and evaluates it against `root`.
///
/// An empty query selects `root` itself.
pub fn evaluate<'a>(root: &'a Value, query: &str) -> Result<Vec<&'a Value>, QueryError> {
    let path = Parser::parse(query).map_err(|cause| QueryError::Syntax {
        query: query.to_string(),
        cause,
    })?;
    tracing::debug!(query, segments = path.segments.len(), "parsed jsonpath");

    Evaluator::new(root)
        .evaluate(&path)
        .map_err(|fault| QueryError::Evaluation {
            query: query.to_string(),
            value: fault.value,
            cause: fault.cause,
        })
}
