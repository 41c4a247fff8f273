//! Output delivery.
//!
//! Files are written atomically:
//! 1. The bytes are written to a temporary sibling file
//! 2. The temporary file is renamed over the target path
//!
//! A failed run therefore never leaves a partially written destination.
//! Existing targets that are not regular files (symlinks, `/dev/stdout`,
//! named pipes) are opened and written in place instead. Targets ending in
//! `.gz` are gzip-compressed.

use crate::error::OutputError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes `data` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, data: &[u8]) -> Result<(), OutputError> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), bytes = data.len(), "writing to file");
            let compress = path.to_string_lossy().ends_with(".gz");
            let result = if is_special_target(path) {
                tracing::debug!("target is not a regular file, writing in place");
                write_file_in_place(path, data, compress)
            } else {
                write_file_atomic(path, data, compress)
            };
            result.map_err(|source| {
                tracing::debug!("error writing to file");
                OutputError::Write {
                    path: path.to_path_buf(),
                    source,
                }
            })
        }
        None => {
            tracing::debug!(bytes = data.len(), "no output path, writing to stdout");
            write_all_counted(io::stdout().lock(), data)
        }
    }
}

/// Writes every byte of `data`, reporting a short write when the writer
/// stops accepting bytes.
pub fn write_all_counted<W: Write>(mut writer: W, data: &[u8]) -> Result<(), OutputError> {
    let mut written = 0;
    while written < data.len() {
        match writer.write(&data[written..]) {
            Ok(0) => {
                tracing::debug!("wrote only {}/{} bytes", written, data.len());
                return Err(OutputError::ShortWrite {
                    written,
                    expected: data.len(),
                });
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(source) => return Err(OutputError::Stdout { source }),
        }
    }
    writer
        .flush()
        .map_err(|source| OutputError::Stdout { source })
}

/// True when `path` exists but is not a regular file, e.g. a symlink or a device.
fn is_special_target(path: &Path) -> bool {
    fs::symlink_metadata(path).map_or(false, |meta| !meta.file_type().is_file())
}

/// Encodes `data` into `writer`, gzip-compressing when asked.
fn write_encoded<W: Write>(mut writer: W, data: &[u8], compress: bool) -> io::Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    if compress {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        encoder.write_all(data)?;
        encoder.finish()?.flush()
    } else {
        writer.write_all(data)?;
        writer.flush()
    }
}

/// Opens `path` (following symlinks) and writes through it.
fn write_file_in_place(path: &Path, data: &[u8], compress: bool) -> io::Result<()> {
    let file = fs::OpenOptions::new().write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    write_encoded(file, data, compress)
}

/// Temporary sibling used while writing `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

/// Writes data to a file atomically, optionally compressing with gzip.
///
/// # Errors
///
/// Returns an error if:
/// - Creating the temp file fails
/// - Writing or compressing fails
/// - Renaming the temp file fails
fn write_file_atomic(path: &Path, data: &[u8], compress: bool) -> io::Result<()> {
    let temp_path = temp_path_for(path);

    let result = (|| {
        write_encoded(fs::File::create(&temp_path)?, data, compress)?;
        fs::rename(&temp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
