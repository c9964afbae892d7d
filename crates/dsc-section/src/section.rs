//! Section membership tracking.
//!
//! A file is scanned top to bottom. The target section opens at the first
//! header carrying the target name and closes at the next header of any name.
//! Once closed it never reopens, so a second `[Components]` further down is
//! treated like any other section.

use std::io::BufRead;

use crate::classify;
use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::reader::{Line, LineReader};

/// Where the scan stands relative to the target section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// The target header has not been seen yet.
    Before,
    /// Lines belong to the target section body.
    Inside,
    /// The target section has been closed by another header.
    After,
}

/// The role of a single line with respect to the target section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEvent {
    /// The line is not part of the target section.
    Outside,
    /// The line is the target section header.
    Enter,
    /// The line is in the target section body.
    Body,
    /// The line is a header that closes the target section.
    Exit,
}

/// Per-operation state machine over section headers.
#[derive(Debug)]
pub struct SectionTracker<'a> {
    target: &'a str,
    max_name_len: Option<usize>,
    state: SectionState,
}

impl<'a> SectionTracker<'a> {
    pub fn new(config: &'a EditorConfig) -> Self {
        Self {
            target: &config.section,
            max_name_len: config.max_section_name_len,
            state: SectionState::Before,
        }
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    /// The section has been entered and exited; no later line can belong to it.
    pub fn is_finished(&self) -> bool {
        self.state == SectionState::After
    }

    /// Classify the next line and advance the state.
    pub fn observe(&mut self, line: &Line) -> Result<SectionEvent> {
        let Some(name) = classify::section_name(&line.raw) else {
            return Ok(match self.state {
                SectionState::Inside => SectionEvent::Body,
                _ => SectionEvent::Outside,
            });
        };

        if let Some(max) = self.max_name_len
            && name.len() > max
        {
            return Err(Error::SectionNameTooLong {
                line: line.number,
                len: name.len(),
                max,
            });
        }

        match self.state {
            SectionState::Inside => {
                tracing::debug!(line = line.number, next = name, "Leaving target section");
                self.state = SectionState::After;
                Ok(SectionEvent::Exit)
            }
            SectionState::Before if name == self.target => {
                tracing::debug!(line = line.number, section = name, "Entering target section");
                self.state = SectionState::Inside;
                Ok(SectionEvent::Enter)
            }
            _ => Ok(SectionEvent::Outside),
        }
    }
}

/// Iterator pairing each line with its [`SectionEvent`].
pub struct SectionLines<'a, R> {
    lines: LineReader<R>,
    tracker: SectionTracker<'a>,
}

impl<R> SectionLines<'_, R> {
    pub fn state(&self) -> SectionState {
        self.tracker.state()
    }

    pub fn is_finished(&self) -> bool {
        self.tracker.is_finished()
    }
}

impl<R: BufRead> Iterator for SectionLines<'_, R> {
    type Item = Result<(Line, SectionEvent)>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        Some(self.tracker.observe(&line).map(|event| (line, event)))
    }
}

/// Stream the lines of `reader`, tracking the section named in `config`.
///
/// # Example
/// ```
/// use dsc_section::EditorConfig;
/// use dsc_section::section::{SectionEvent, section_lines};
///
/// let config = EditorConfig::default();
/// let input = b"[Defines]\n[Components]\n  Foo.inf\n[Libs]\n";
/// let events: Vec<SectionEvent> = section_lines(&input[..], &config)
///     .map(|item| item.unwrap().1)
///     .collect();
/// assert_eq!(
///     events,
///     vec![
///         SectionEvent::Outside,
///         SectionEvent::Enter,
///         SectionEvent::Body,
///         SectionEvent::Exit,
///     ]
/// );
/// ```
pub fn section_lines<R: BufRead>(reader: R, config: &EditorConfig) -> SectionLines<'_, R> {
    SectionLines {
        lines: LineReader::new(reader).with_max_len(config.max_line_len),
        tracker: SectionTracker::new(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SectionEvent::*;

    fn events(input: &str, config: &EditorConfig) -> Vec<SectionEvent> {
        section_lines(input.as_bytes(), config)
            .map(|item| item.unwrap().1)
            .collect()
    }

    #[test]
    fn test_section_runs_to_eof() {
        let config = EditorConfig::default();
        assert_eq!(
            events("x\n[Components]\na\n\nb", &config),
            vec![Outside, Enter, Body, Body, Body]
        );
    }

    #[test]
    fn test_second_components_section_is_ignored() {
        let config = EditorConfig::default();
        assert_eq!(
            events("[Components]\na\n[Other]\nb\n[Components]\nc\n", &config),
            vec![Enter, Body, Exit, Outside, Outside, Outside]
        );
    }

    #[test]
    fn test_back_to_back_components_headers() {
        let config = EditorConfig::default();
        assert_eq!(
            events("[Components]\n[Components]\na\n", &config),
            vec![Enter, Exit, Outside]
        );
    }

    #[test]
    fn test_malformed_header_is_body() {
        let config = EditorConfig::default();
        assert_eq!(
            events("[Components]\n[Foo Bar]\na\n", &config),
            vec![Enter, Body, Body]
        );
    }

    #[test]
    fn test_custom_section_name() {
        let config = EditorConfig::default().with_section("LibraryClasses");
        assert_eq!(
            events("[Components]\na\n[LibraryClasses]\nb\n", &config),
            vec![Outside, Outside, Enter, Body]
        );
    }

    #[test]
    fn test_tracker_states() {
        let config = EditorConfig::default();
        let mut lines = section_lines(&b"[Components]\na\n[Next]\nb\n"[..], &config);
        lines.next();
        assert!(!lines.is_finished());
        lines.next();
        lines.next();
        assert!(lines.is_finished());
    }

    #[test]
    fn test_section_name_limit() {
        let config = EditorConfig {
            max_section_name_len: Some(4),
            ..EditorConfig::default()
        };
        let result: Result<Vec<_>> = section_lines(&b"[Libs]\n[Components]\n"[..], &config).collect();
        match result {
            Err(Error::SectionNameTooLong { line, len, max }) => {
                assert_eq!((line, len, max), (2, 10, 4));
            }
            other => panic!("expected SectionNameTooLong, got {:?}", other),
        }
    }
}
