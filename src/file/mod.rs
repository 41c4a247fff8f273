//! Input and output plumbing.
//!
//! This module provides the two I/O primitives of a conversion run: reading
//! the whole input (a file or piped stdin) into memory, and delivering the
//! serialized result (a file, written atomically, or stdout).

pub mod loader;
pub mod saver;

pub use loader::read_input;
pub use saver::write_output;
