//! Decode path: text → table.

use crate::error::{CodecError, Result};
use csv_line::{tokenize, Table};
use std::io::{self, BufRead};
use tracing::debug;

/// Decode a whole text blob into a table.
///
/// An absent input decodes to `None`, an empty input to a table with no
/// records. Lines end at `\n`, `\r\n` or a lone `\r`; a trailing terminator
/// does not add an empty record.
///
/// ```
/// let table = csv_codec::decode("x,y\nz").unwrap().unwrap();
/// assert_eq!(table, vec![vec!["x", "y"], vec!["z"]]);
///
/// assert_eq!(csv_codec::decode(None).unwrap(), None);
/// assert_eq!(csv_codec::decode("").unwrap(), Some(vec![]));
/// ```
pub fn decode<'a>(text: impl Into<Option<&'a str>>) -> Result<Option<Table>> {
    let Some(text) = text.into() else {
        return Ok(None);
    };
    decode_stream(split_lines(text).map(Ok::<_, io::Error>)).map(Some)
}

/// Decode lines produced by an already opened source.
///
/// The source is drained completely. Lines must already have their
/// terminators stripped, which is what [`BufRead::lines`] yields.
pub fn decode_stream<I, L>(lines: I) -> Result<Table>
where
    I: IntoIterator<Item = io::Result<L>>,
    L: AsRef<str>,
{
    let mut table = Table::new();
    for (index, line) in lines.into_iter().enumerate() {
        let number = index + 1;
        let line = line.map_err(|e| CodecError::io(format!("reading line {number}"), e))?;
        let record = tokenize(line.as_ref())
            .map_err(|source| CodecError::MalformedField {
                line: number,
                source,
            })?;
        table.push(record);
    }

    debug!("Decoded {} records", table.len());
    Ok(table)
}

/// Decode everything a buffered reader yields.
pub fn decode_reader<R: BufRead>(reader: R) -> Result<Table> {
    decode_stream(reader.lines())
}

/// Split on `\n`, `\r\n` and lone `\r`, without a trailing empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text).filter(|t| !t.is_empty());
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(&['\r', '\n'][..]) {
            None => {
                rest = None;
                Some(current)
            }
            Some(at) => {
                let skip = if current[at..].starts_with("\r\n") { 2 } else { 1 };
                let next = &current[at + skip..];
                rest = Some(next).filter(|t| !t.is_empty());
                Some(&current[..at])
            }
        }
    })
}
