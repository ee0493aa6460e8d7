//! Line sinks: where encoded records go.

use crate::options::LineTerminator;
use std::io::{self, Write};

/// Accepts encoded records one line at a time, in call order.
///
/// The encoder decides where terminators go: every record but the last is
/// written with [`write_line`](LineSink::write_line), the last with
/// [`write_last`](LineSink::write_last).
pub trait LineSink {
    /// Write `line` followed by a line terminator.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Write `line` with no terminator after it.
    fn write_last(&mut self, line: &str) -> io::Result<()>;
}

/// In-memory capture, terminated with `\n`.
impl LineSink for String {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push_str(line);
        self.push('\n');
        Ok(())
    }

    fn write_last(&mut self, line: &str) -> io::Result<()> {
        self.push_str(line);
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn write_last(&mut self, line: &str) -> io::Result<()> {
        (**self).write_last(line)
    }
}

/// Adapts any [`Write`] into a [`LineSink`].
#[derive(Debug)]
pub struct LineWriter<W> {
    inner: W,
    terminator: LineTerminator,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_terminator(inner, LineTerminator::default())
    }

    pub fn with_terminator(inner: W, terminator: LineTerminator) -> Self {
        Self { inner, terminator }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Flush buffered output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> LineSink for LineWriter<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(self.terminator.as_str().as_bytes())
    }

    fn write_last(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())
    }
}
