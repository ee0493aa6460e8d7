//! Reverse conversion: CSV line → record.
//!
//! The tokenizer is a four-state machine run once per field:
//!
//! | State            | `,`                     | `"`                         | other / end            |
//! |------------------|-------------------------|-----------------------------|------------------------|
//! | `Start`          | empty field, continue   | enter `Quoted`              | enter `Unquoted`       |
//! | `Unquoted`       | field ends              | error                       | append / field ends    |
//! | `Quoted`         | append                  | enter `QuoteLookahead`      | append / error at end  |
//! | `QuoteLookahead` | field ends              | append one `"`, `Quoted`    | error / field ends     |
//!
//! Delimiters are ASCII, so the machine walks bytes and only slices the line
//! at delimiter positions, which are always character boundaries.

use crate::error::TokenizeError;
use crate::{Field, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Unquoted,
    Quoted,
    QuoteLookahead,
}

/// Split one line into its fields.
///
/// An absent line yields no fields; an empty line yields exactly one empty
/// field. The line must not contain line terminators outside quoted fields.
///
/// ```
/// use csv_line::tokenize;
///
/// assert_eq!(tokenize("a,\"hello, world\",").unwrap(), vec!["a", "hello, world", ""]);
/// assert_eq!(tokenize("").unwrap(), vec![""]);
/// assert!(tokenize(None).unwrap().is_empty());
/// ```
pub fn tokenize<'a>(line: impl Into<Option<&'a str>>) -> Result<Record, TokenizeError> {
    match line.into() {
        None => Ok(Vec::new()),
        Some(line) => fields(line).collect(),
    }
}

/// Iterate over the fields of one line.
pub fn fields(line: &str) -> Fields<'_> {
    Fields {
        line,
        pos: Some(0),
    }
}

/// Extract the first field of `text` and the unconsumed remainder.
///
/// The remainder is `None` exactly when the returned field is the last one
/// on the line. Error columns are relative to `text`.
pub fn next_field(text: &str) -> Result<(Field, Option<&str>), TokenizeError> {
    let (field, consumed) = scan_field(text)?;
    Ok((field, consumed.map(|end| &text[end..])))
}

/// Lazy field iterator returned by [`fields`].
///
/// Stops after the last field or after the first error.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    line: &'a str,
    /// Byte offset where the next field starts; `None` once exhausted.
    pos: Option<usize>,
}

impl<'a> Fields<'a> {
    /// The unconsumed part of the line, or `None` when no field follows.
    pub fn remainder(&self) -> Option<&'a str> {
        self.pos.map(|pos| &self.line[pos..])
    }
}

impl Iterator for Fields<'_> {
    type Item = Result<Field, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos?;
        match scan_field(&self.line[start..]) {
            Ok((field, consumed)) => {
                self.pos = consumed.map(|end| start + end);
                Some(Ok(field))
            }
            Err(e) => {
                self.pos = None;
                let prefix = self.line[..start].chars().count();
                Some(Err(e.shifted(prefix)))
            }
        }
    }
}

/// Run the state machine over `rest` for one field.
///
/// Returns the field and, when another field follows, the byte length of
/// `rest` consumed including the delimiter. Error columns are relative to
/// `rest`.
fn scan_field(rest: &str) -> Result<(Field, Option<usize>), TokenizeError> {
    let bytes = rest.as_bytes();
    let column = |at: usize| rest[..at].chars().count() + 1;

    let mut state = State::Start;
    let mut field = Field::new();
    // Start of the verbatim run not yet copied into `field`.
    let mut run = 0;
    let mut i = 0;

    loop {
        match state {
            State::Start => match bytes.first() {
                None => return Ok((field, None)),
                Some(b',') => return Ok((field, Some(1))),
                Some(b'"') => {
                    i = 1;
                    run = 1;
                    state = State::Quoted;
                }
                Some(_) => state = State::Unquoted,
            },
            State::Unquoted => match bytes.get(i) {
                None => {
                    field.push_str(&rest[run..]);
                    return Ok((field, None));
                }
                Some(b',') => {
                    field.push_str(&rest[run..i]);
                    return Ok((field, Some(i + 1)));
                }
                Some(b'"') => {
                    return Err(TokenizeError::QuoteInUnquotedField { column: column(i) })
                }
                Some(_) => i += 1,
            },
            State::Quoted => match bytes.get(i) {
                None => return Err(TokenizeError::UnterminatedQuote { column: column(0) }),
                Some(b'"') => {
                    field.push_str(&rest[run..i]);
                    i += 1;
                    state = State::QuoteLookahead;
                }
                Some(_) => i += 1,
            },
            State::QuoteLookahead => match bytes.get(i) {
                None => return Ok((field, None)),
                Some(b',') => return Ok((field, Some(i + 1))),
                Some(b'"') => {
                    field.push('"');
                    i += 1;
                    run = i;
                    state = State::Quoted;
                }
                Some(_) => {
                    let found = rest[i..].chars().next().unwrap_or_default();
                    return Err(TokenizeError::UnexpectedAfterQuote {
                        column: column(i),
                        found,
                    });
                }
            },
        }
    }
}
