//! Line-by-line reading with original terminators preserved.

use std::borrow::Cow;
use std::io::{BufRead, Read};

use serde::Serialize;

use crate::error::{Error, Result};

/// A single line of the source, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The 1-based line number in the source.
    pub number: usize,
    /// The raw bytes, including the trailing `\n` (and `\r`) if present.
    pub raw: Vec<u8>,
}

impl Line {
    /// The line without its `\n` or `\r\n` terminator.
    pub fn content(&self) -> &[u8] {
        let raw: &[u8] = &self.raw;
        let line = raw.strip_suffix(b"\n").unwrap_or(raw);
        line.strip_suffix(b"\r").unwrap_or(line)
    }

    /// Returns `true` if the line ends with `\n`.
    pub fn is_terminated(&self) -> bool {
        self.raw.ends_with(b"\n")
    }

    /// The content decoded for display, replacing invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.content())
    }
}

/// A line reported back to the caller: matched, added or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    /// The 1-based line number (in the source for matches and deletions,
    /// in the output for insertions).
    pub line_number: usize,
    /// The line content without its terminator.
    pub content: String,
}

impl From<&Line> for LineReport {
    fn from(line: &Line) -> Self {
        Self {
            line_number: line.number,
            content: line.text().into_owned(),
        }
    }
}

/// Iterator over the lines of a buffered reader.
///
/// Stops after the first error. With a length limit set, a line longer than
/// the limit (terminator excluded) fails with [`Error::LineTooLong`] without
/// being read in full.
pub struct LineReader<R> {
    inner: R,
    number: usize,
    max_len: Option<usize>,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            number: 0,
            max_len: None,
            done: false,
        }
    }

    /// Reject lines longer than `max_len` bytes.
    pub fn with_max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut raw = Vec::new();
        let read = match self.max_len {
            // An accepted line and its `\n` fit in max + 1 bytes.
            Some(max) => {
                let cap = u64::try_from(max.saturating_add(1)).unwrap_or(u64::MAX);
                (&mut self.inner).take(cap).read_until(b'\n', &mut raw)
            }
            None => self.inner.read_until(b'\n', &mut raw),
        };
        match read {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.number += 1;
                let len = raw.len() - usize::from(raw.ends_with(b"\n"));
                if let Some(max) = self.max_len
                    && len > max
                {
                    self.done = true;
                    return Some(Err(Error::LineTooLong {
                        line: self.number,
                        len,
                        max,
                    }));
                }
                Some(Ok(Line {
                    number: self.number,
                    raw,
                }))
            }
            Err(e) => {
                self.done = true;
                Some(Err(Error::read(e)))
            }
        }
    }
}
