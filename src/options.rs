//! Export configuration.

use anyhow::Context;
use csv_codec_file::{WriteMode, DEFAULT_BUFFER_SIZE};
use serde::{Deserialize, Serialize};

/// Line terminator written after every record but the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
}

impl LineTerminator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

/// Options for writing a table to a file.
///
/// ```toml
/// overwrite = true
/// line_terminator = "crlf"
/// buffer_size = 65536
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Truncate an existing file instead of appending to it
    #[serde(default)]
    pub overwrite: bool,
    /// Terminator between records
    #[serde(default)]
    pub line_terminator: LineTerminator,
    /// Write buffer capacity in bytes
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            overwrite: false,
            line_terminator: LineTerminator::default(),
            buffer_size: default_buffer_size(),
        }
    }
}

impl ExportOptions {
    /// Parse options from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let options: Self = toml::from_str(s).context("Failed to parse export options")?;
        if options.buffer_size == 0 {
            anyhow::bail!("buffer_size must be greater than zero");
        }
        Ok(options)
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn write_mode(&self) -> WriteMode {
        WriteMode::from_overwrite(self.overwrite)
    }
}
