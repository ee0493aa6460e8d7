//! File import and export on top of the codec.

use crate::decode::decode_stream;
use crate::encode::encode_with;
use crate::error::CodecError;
use crate::options::ExportOptions;
use crate::sink::LineWriter;
use anyhow::{Context, Result};
use csv_codec_file::{LocalFileReader, LocalFileWriter, DEFAULT_BUFFER_SIZE};
use csv_line::{escape_record, Record, Table};
use std::path::Path;
use tracing::info;

/// Read and decode a whole file.
pub fn import_file(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let lines = LocalFileReader::lines(path, DEFAULT_BUFFER_SIZE)?;
    let table =
        decode_stream(lines).with_context(|| format!("Failed to decode {}", path.display()))?;

    info!("Imported {} records from {}", table.len(), path.display());
    Ok(table)
}

/// Encode a table into a file.
///
/// Whether an existing file is truncated or appended to, and which line
/// terminator is used, come from `options`.
pub fn export_file(table: Table, path: impl AsRef<Path>, options: &ExportOptions) -> Result<()> {
    export_file_with(table, path, |record: &Record| escape_record(record), options)
}

/// Encode any items into a file through a caller-supplied projection.
///
/// A blank path fails with [`CodecError::InvalidArgument`] before the file
/// is touched.
pub fn export_file_with<T, F>(
    items: Vec<T>,
    path: impl AsRef<Path>,
    projection: F,
    options: &ExportOptions,
) -> Result<()>
where
    F: FnMut(&T) -> String,
{
    let path = path.as_ref();
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(CodecError::InvalidArgument("path must not be blank".to_string()).into());
    }

    let count = items.len();
    let file = LocalFileWriter::open(path, options.write_mode(), options.buffer_size)?;
    let mut writer = LineWriter::with_terminator(file, options.line_terminator);

    encode_with(Some(items), Some(projection), Some(&mut writer))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .map_err(|e| CodecError::io("flushing output", e))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        "Exported {} records to {} ({:?})",
        count,
        path.display(),
        options.write_mode()
    );
    Ok(())
}
