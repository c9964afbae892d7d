//! Entry insertion at the end of the target section.
//!
//! The new line goes in front of the section's trailing run of blank lines,
//! or right before the closing header if the section does not end with a
//! blank line. Blank body lines are held back until the next non-blank line
//! shows whether they are trailing, so the file is streamed in one pass.

use std::io::{BufRead, Write};

use crate::classify::is_blank;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::reader::{Line, LineReport};
use crate::section::{SectionEvent, SectionState, section_lines};
use crate::sink::LineSink;

/// Copies `reader` to `writer` with one new entry line spliced in.
///
/// The entry is written as the configured indent and `entry`, ending with the
/// terminator of the line before it (`\r\n` in CRLF files, else `\n`). If
/// the target section is absent the entry is appended at end of file.
/// Existing entries are not deduplicated.
///
/// Returns the inserted line with its 1-based number in the output.
///
/// # Example
/// ```
/// use dsc_section::{EditorConfig, insert};
///
/// let input = b"[Components]\n  Foo.inf\n\n[Next]\n";
/// let mut output = Vec::new();
/// let added = insert(&input[..], &mut output, "Bar.inf", &EditorConfig::default()).unwrap();
/// assert_eq!(output, b"[Components]\n  Foo.inf\n  Bar.inf\n\n[Next]\n");
/// assert_eq!(added.line_number, 3);
/// ```
pub fn insert<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    entry: &str,
    config: &EditorConfig,
) -> Result<LineReport> {
    config.validate()?;
    let entry_text = config.entry_text(entry);
    let mut out = LineSink::new(writer);
    let mut trailing_blanks: Vec<Line> = Vec::new();
    let mut inserted = None;

    let mut lines = section_lines(reader, config);
    for item in lines.by_ref() {
        let (line, event) = item?;
        match event {
            SectionEvent::Body if is_blank(&line.raw) => {
                trailing_blanks.push(line);
                continue;
            }
            SectionEvent::Body => out.write_lines(trailing_blanks.drain(..))?,
            SectionEvent::Exit => {
                tracing::debug!(before_line = line.number, "Inserting at section end");
                inserted = Some(out.write_entry(&entry_text)?);
                out.write_lines(trailing_blanks.drain(..))?;
            }
            SectionEvent::Enter | SectionEvent::Outside => {}
        }
        out.write_line(&line)?;
    }

    let inserted = match inserted {
        Some(report) => report,
        None => {
            if lines.state() == SectionState::Before {
                tracing::warn!(section = %config.section, "Section not found, appending entry at end of file");
            }
            let report = out.write_entry(&entry_text)?;
            out.write_lines(trailing_blanks.drain(..))?;
            report
        }
    };

    out.flush()?;
    Ok(inserted)
}
