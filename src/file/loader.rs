//! Input loading.
//!
//! Input is read fully into memory before decoding. Gzip-compressed input is
//! detected by its magic bytes and decompressed transparently.

use crate::error::InputError;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Reads the whole input.
///
/// With a path, the file is read. Without one, standard input is read, which
/// must not be an interactive terminal.
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be opened or read
/// - No path is given and stdin is a terminal
/// - The input looks gzipped but does not decompress
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>, InputError> {
    let raw = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading input file");
            fs::read(path).map_err(|source| InputError::Open {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => {
            let stdin = io::stdin();
            let is_terminal = stdin.is_terminal();
            read_piped(stdin.lock(), is_terminal)?
        }
    };

    tracing::debug!(bytes = raw.len(), "read input");
    decompress_if_gzipped(raw)
}

/// Reads all bytes from a piped reader.
///
/// `is_terminal` reports whether the reader is attached to an interactive
/// terminal; such a reader is refused rather than waited on.
pub fn read_piped<R: Read>(mut reader: R, is_terminal: bool) -> Result<Vec<u8>, InputError> {
    if is_terminal {
        tracing::debug!("stdin is a terminal, refusing to read");
        return Err(InputError::NotPiped);
    }
    tracing::debug!("no input path, using piped stdin");

    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|source| InputError::Read { source })?;
    Ok(buffer)
}

/// Decompresses `bytes` when they start with the gzip magic number.
pub fn decompress_if_gzipped(bytes: Vec<u8>) -> Result<Vec<u8>, InputError> {
    use flate2::read::GzDecoder;

    if !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(bytes);
    }

    tracing::debug!("input is gzipped, decompressing");
    let mut decoder = GzDecoder::new(bytes.as_slice());
    let mut content = Vec::new();
    decoder
        .read_to_end(&mut content)
        .map_err(|source| InputError::Decompress { source })?;
    Ok(content)
}
