//! Encode path: table → lines written to a sink.

use crate::error::{CodecError, Result};
use crate::sink::LineSink;
use csv_line::{escape_record, Record, Table};
use tracing::debug;

/// Encode a table to `sink`, one escaped line per record.
///
/// The last record is written without a terminator, so decoding what the
/// sink captured yields the table back with no extra empty record.
///
/// ```
/// let mut out = String::new();
/// csv_codec::encode(vec![vec!["x".into(), "y".into()], vec!["z".into()]], &mut out).unwrap();
/// assert_eq!(out, "x,y\nz");
/// ```
pub fn encode<S: LineSink + ?Sized>(table: Table, sink: &mut S) -> Result<()> {
    encode_with(Some(table), Some(|record: &Record| escape_record(record)), Some(sink))
}

/// Encode any items to `sink` through a caller-supplied projection.
///
/// Every argument is required: a `None` fails with
/// [`CodecError::InvalidArgument`] before anything is written. A write
/// failure aborts the call and leaves the sink as far written as the
/// failing write left it.
pub fn encode_with<T, F, S>(
    items: Option<Vec<T>>,
    projection: Option<F>,
    sink: Option<&mut S>,
) -> Result<()>
where
    F: FnMut(&T) -> String,
    S: LineSink + ?Sized,
{
    let items = items.ok_or_else(|| missing("items"))?;
    let mut projection = projection.ok_or_else(|| missing("projection"))?;
    let sink = sink.ok_or_else(|| missing("sink"))?;

    let last = items.len().saturating_sub(1);
    for (index, item) in items.iter().enumerate() {
        let line = projection(item);
        let written = if index == last {
            sink.write_last(&line)
        } else {
            sink.write_line(&line)
        };
        written.map_err(|e| CodecError::io(format!("writing record {}", index + 1), e))?;
    }

    debug!("Encoded {} records", items.len());
    Ok(())
}

fn missing(argument: &str) -> CodecError {
    CodecError::InvalidArgument(format!("{argument} must be provided"))
}
