//! Error types for the table codec.

use csv_line::TokenizeError;
use thiserror::Error;

/// Errors that can occur while decoding or encoding a table.
#[derive(Error, Debug)]
pub enum CodecError {
    /// A line did not follow the quoting grammar. `line` is 1-based.
    #[error("malformed field on line {line}: {source}")]
    MalformedField {
        line: usize,
        #[source]
        source: TokenizeError,
    },

    /// A required argument was missing or blank.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The line source or sink failed.
    #[error("IO error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CodecError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        CodecError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
