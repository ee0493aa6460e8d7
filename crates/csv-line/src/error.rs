//! Error types for the line tokenizer.

use thiserror::Error;

/// A line whose characters do not follow the quoting grammar.
///
/// Columns are 1-based character positions within the line handed to the
/// tokenizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A `"` appeared inside a field that did not start with one.
    #[error("unexpected '\"' inside unquoted field at column {column}")]
    QuoteInUnquotedField { column: usize },

    /// A closing quote was followed by something other than `,` or end of line.
    #[error("unexpected {found:?} after closing quote at column {column}")]
    UnexpectedAfterQuote { column: usize, found: char },

    /// The line ended while still inside a quoted field.
    #[error("quoted field opened at column {column} is never closed")]
    UnterminatedQuote { column: usize },
}

impl TokenizeError {
    /// Column the error points at.
    pub fn column(&self) -> usize {
        match self {
            TokenizeError::QuoteInUnquotedField { column }
            | TokenizeError::UnexpectedAfterQuote { column, .. }
            | TokenizeError::UnterminatedQuote { column } => *column,
        }
    }

    /// Move the column right by `chars`, for errors found in a line suffix.
    pub(crate) fn shifted(self, chars: usize) -> Self {
        match self {
            TokenizeError::QuoteInUnquotedField { column } => {
                TokenizeError::QuoteInUnquotedField {
                    column: column + chars,
                }
            }
            TokenizeError::UnexpectedAfterQuote { column, found } => {
                TokenizeError::UnexpectedAfterQuote {
                    column: column + chars,
                    found,
                }
            }
            TokenizeError::UnterminatedQuote { column } => TokenizeError::UnterminatedQuote {
                column: column + chars,
            },
        }
    }
}
