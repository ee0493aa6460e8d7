//! File access for reading and writing line-oriented text on the local filesystem
//!
//! This crate owns the lifecycle of the files behind a decode or encode call:
//! opening, buffering and closing. Everything it hands out closes its file
//! when dropped, on every exit path.
//!
//! # Write Modes
//!
//! - **Overwrite**: create the file, truncating any existing content
//! - **Append**: create the file if missing, otherwise add to its end
//!
//! # Example
//!
//! ```ignore
//! use csv_codec_file::{LocalFileReader, LocalFileWriter, WriteMode, DEFAULT_BUFFER_SIZE};
//!
//! for line in LocalFileReader::lines("in.csv", DEFAULT_BUFFER_SIZE)? {
//!     let line = line?;
//!     // Tokenize line...
//! }
//!
//! let writer = LocalFileWriter::open("out.csv", WriteMode::Overwrite, DEFAULT_BUFFER_SIZE)?;
//! ```

mod local;

pub use local::{LocalFileReader, LocalFileWriter};

/// Default buffer size for reading and writing operations (8KB)
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// How an existing destination file is treated when opened for writing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate existing content
    Overwrite,
    /// Keep existing content and write after it
    #[default]
    Append,
}

impl WriteMode {
    /// Map an `overwrite` flag to a mode
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite {
            WriteMode::Overwrite
        } else {
            WriteMode::Append
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_mode_from_overwrite() {
        assert_eq!(WriteMode::from_overwrite(true), WriteMode::Overwrite);
        assert_eq!(WriteMode::from_overwrite(false), WriteMode::Append);
    }

    #[test]
    fn test_write_mode_default_is_append() {
        assert_eq!(WriteMode::default(), WriteMode::Append);
    }
}
