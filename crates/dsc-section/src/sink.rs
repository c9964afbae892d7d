//! Output side of the rewriting operations.

use std::io::Write;

use crate::error::{Error, Result};
use crate::reader::{Line, LineReport};

/// Counts the lines written so inserted entries can report their position.
pub(crate) struct LineSink<'w, W: Write> {
    inner: &'w mut W,
    lines_written: usize,
    /// Whether the last byte written was a `\n` (true before any output).
    at_line_start: bool,
    /// Terminator of the most recent terminated line, reused for new entries.
    terminator: &'static [u8],
}

impl<'w, W: Write> LineSink<'w, W> {
    pub(crate) fn new(inner: &'w mut W) -> Self {
        Self {
            inner,
            lines_written: 0,
            at_line_start: true,
            terminator: b"\n",
        }
    }

    pub(crate) fn write_line(&mut self, line: &Line) -> Result<()> {
        self.inner.write_all(&line.raw).map_err(Error::write)?;
        self.lines_written += 1;
        self.at_line_start = line.is_terminated();
        if line.raw.ends_with(b"\r\n") {
            self.terminator = b"\r\n";
        } else if self.at_line_start {
            self.terminator = b"\n";
        }
        Ok(())
    }

    pub(crate) fn write_lines(&mut self, lines: impl IntoIterator<Item = Line>) -> Result<()> {
        for line in lines {
            self.write_line(&line)?;
        }
        Ok(())
    }

    /// Write a new entry line on a line of its own.
    ///
    /// The entry ends with the same terminator as the line before it (`\n`
    /// if nothing terminated was written yet). A source whose last line has
    /// no terminator gets one first.
    pub(crate) fn write_entry(&mut self, entry_text: &[u8]) -> Result<LineReport> {
        if !self.at_line_start {
            self.inner.write_all(self.terminator).map_err(Error::write)?;
        }
        let mut raw = Vec::with_capacity(entry_text.len() + self.terminator.len());
        raw.extend_from_slice(entry_text);
        raw.extend_from_slice(self.terminator);
        self.inner.write_all(&raw).map_err(Error::write)?;
        self.lines_written += 1;
        self.at_line_start = true;

        let line = Line {
            number: self.lines_written,
            raw,
        };
        Ok(LineReport::from(&line))
    }

    pub(crate) fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(Error::write)
    }
}
