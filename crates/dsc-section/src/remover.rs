//! Entry removal from the target section.

use std::io::{BufRead, Write};

use crate::classify::matches_prefix;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::reader::LineReport;
use crate::section::{SectionEvent, section_lines};
use crate::sink::LineSink;

/// Copies `reader` to `writer`, dropping matching body lines of the target section.
///
/// Headers and lines outside the section are always copied. Returns the
/// removed lines with their original line numbers.
///
/// # Example
/// ```
/// use dsc_section::{EditorConfig, remove};
///
/// let input = b"[Components]\n  Foo.inf\n  Bar.inf\n[Next]\n  Foo.inf\n";
/// let mut output = Vec::new();
/// let removed = remove(&input[..], &mut output, "Foo", &EditorConfig::default()).unwrap();
/// assert_eq!(output, b"[Components]\n  Bar.inf\n[Next]\n  Foo.inf\n");
/// assert_eq!(removed[0].line_number, 2);
/// ```
pub fn remove<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    target: &str,
    config: &EditorConfig,
) -> Result<Vec<LineReport>> {
    config.validate()?;
    let mut out = LineSink::new(writer);
    let mut removed = Vec::new();

    for item in section_lines(reader, config) {
        let (line, event) = item?;
        if event == SectionEvent::Body && matches_prefix(&line.raw, target.as_bytes()) {
            tracing::debug!(line = line.number, "Removing entry");
            removed.push(LineReport::from(&line));
            continue;
        }
        out.write_line(&line)?;
    }

    out.flush()?;
    Ok(removed)
}
