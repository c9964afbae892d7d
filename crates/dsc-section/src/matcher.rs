//! Read-only lookup of entry lines.

use std::io::BufRead;

use crate::classify::matches_prefix;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::reader::LineReport;
use crate::section::{SectionEvent, section_lines};

/// Finds every body line of the target section that starts with `target`.
///
/// Leading whitespace is ignored; the comparison is an exact byte prefix.
/// Scanning stops at the header that closes the section.
///
/// # Example
/// ```
/// use dsc_section::{EditorConfig, find_matches};
///
/// let input = b"[Components]\n  MdePkg/A.inf\n  MdePkg/B.inf\n  Other/C.inf\n";
/// let matches = find_matches(&input[..], "MdePkg", &EditorConfig::default()).unwrap();
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[1].line_number, 3);
/// ```
pub fn find_matches<R: BufRead>(
    reader: R,
    target: &str,
    config: &EditorConfig,
) -> Result<Vec<LineReport>> {
    config.validate()?;
    let mut matches = Vec::new();
    let mut lines = section_lines(reader, config);

    while !lines.is_finished() {
        let Some(item) = lines.next() else { break };
        let (line, event) = item?;
        if event == SectionEvent::Body && matches_prefix(&line.raw, target.as_bytes()) {
            matches.push(LineReport::from(&line));
        }
    }

    tracing::debug!(count = matches.len(), "Matched lines");
    Ok(matches)
}
