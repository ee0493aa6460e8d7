//! Local filesystem reader and writer implementations

use crate::WriteMode;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Lines};
use std::path::Path;

/// Reads a local file with configurable buffering
pub struct LocalFileReader;

impl LocalFileReader {
    /// Open a local file and return a buffered reader
    ///
    /// # Arguments
    /// * `path` - Path to the file
    /// * `buffer_size` - Capacity of the read buffer in bytes
    pub fn open(path: impl AsRef<Path>, buffer_size: usize) -> Result<BufReader<File>> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        tracing::debug!("Opened {} for reading", path.display());

        Ok(BufReader::with_capacity(buffer_size, file))
    }

    /// Open a local file as a lazy sequence of lines
    ///
    /// Lines are split on `\n` with a preceding `\r` stripped; the
    /// terminators are not part of the yielded text.
    pub fn lines(path: impl AsRef<Path>, buffer_size: usize) -> Result<Lines<BufReader<File>>> {
        Ok(Self::open(path, buffer_size)?.lines())
    }
}

/// Opens a local file for buffered writing
pub struct LocalFileWriter;

impl LocalFileWriter {
    /// Open a local file for writing
    ///
    /// The file is created when missing. With [`WriteMode::Overwrite`]
    /// existing content is truncated; with [`WriteMode::Append`] writes land
    /// after it. The caller must flush the returned writer to observe write
    /// errors; dropping it flushes on a best-effort basis.
    pub fn open(
        path: impl AsRef<Path>,
        mode: WriteMode,
        buffer_size: usize,
    ) -> Result<BufWriter<File>> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        match mode {
            WriteMode::Overwrite => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.create(true).append(true),
        };
        let file = options
            .open(path)
            .with_context(|| format!("Failed to open file for writing: {}", path.display()))?;

        tracing::debug!("Opened {} for writing ({:?})", path.display(), mode);

        Ok(BufWriter::with_capacity(buffer_size, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[test]
    fn test_open_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        std::fs::write(&file_path, "hello world").unwrap();

        let mut reader = LocalFileReader::open(&file_path, 1024).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();

        assert_eq!(contents, "hello world");
    }

    #[test]
    fn test_lines_strip_terminators() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.csv");
        std::fs::write(&file_path, "a,b\r\nc\n\nd").unwrap();

        let lines: Vec<String> = LocalFileReader::lines(&file_path, 1024)
            .unwrap()
            .collect::<std::io::Result<_>>()
            .unwrap();

        assert_eq!(lines, vec!["a,b", "c", "", "d"]);
    }

    #[test]
    fn test_open_file_not_found() {
        let err = LocalFileReader::open("/nonexistent/path/file.csv", 1024).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/path/file.csv"));
    }

    #[test]
    fn test_writer_overwrite_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.csv");
        std::fs::write(&file_path, "old content that is long").unwrap();

        let mut writer = LocalFileWriter::open(&file_path, WriteMode::Overwrite, 1024).unwrap();
        writer.write_all(b"new").unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "new");
    }

    #[test]
    fn test_writer_append_keeps_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.csv");
        std::fs::write(&file_path, "old").unwrap();

        let mut writer = LocalFileWriter::open(&file_path, WriteMode::Append, 1024).unwrap();
        writer.write_all(b"new").unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "oldnew");
    }

    #[test]
    fn test_writer_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("fresh.csv");

        for mode in [WriteMode::Append, WriteMode::Overwrite] {
            let _ = std::fs::remove_file(&file_path);
            let writer = LocalFileWriter::open(&file_path, mode, 1024).unwrap();
            drop(writer);
            assert!(file_path.exists());
        }
    }

    #[test]
    fn test_writer_missing_directory() {
        let result = LocalFileWriter::open(
            "/nonexistent/dir/out.csv",
            WriteMode::Overwrite,
            1024,
        );
        assert!(result.is_err());
    }
}
