//! Document model and YAML decoding.

pub mod decoder;
pub mod value;

pub use decoder::{decode, decode_str};
pub use value::{Value, YamlNumber};
