//! Section-scoped line editing for DSC files.
//!
//! This crate edits the body of one named section (by default
//! `[Components]`) of an INI-like file while copying every other byte
//! through unchanged:
//!
//! ```text
//! [Defines]
//!   PLATFORM_NAME = Board
//!
//! [Components]
//!   MdeModulePkg/Universal/PCD/Pei/Pcd.inf   <- body line
//!   UefiCpuPkg/CpuDxe/CpuDxe.inf             <- body line
//!                                            <- trailing blank run
//! [LibraryClasses]
//! ```
//!
//! A header is a line whose first non-blank character is `[` followed by an
//! ASCII alphanumeric name and `]`. The section runs to the next header or to
//! end of file. Entries are matched by literal prefix after leading
//! whitespace.
//!
//! Three operations share one [`section::SectionTracker`]:
//!
//! - [`find_matches`] reports matching body lines;
//! - [`insert`] writes a copy with a new entry in front of the trailing blank
//!   run (or before the closing header, or at end of file);
//! - [`remove`] writes a copy without the matching body lines.
//!
//! The [`file`] module wraps them for paths on disk.

pub mod classify;
pub mod config;
pub mod error;
pub mod file;
pub mod inserter;
pub mod matcher;
pub mod reader;
pub mod remover;
pub mod section;
mod sink;

pub use config::EditorConfig;
pub use error::{Error, Result};
pub use file::{
    Preview, count_matches, delete_entries, find_matches_in_file, insert_entry, preview_delete,
    preview_insert,
};
pub use inserter::insert;
pub use matcher::find_matches;
pub use reader::{Line, LineReader, LineReport};
pub use remover::remove;
pub use section::{SectionEvent, SectionLines, SectionState, SectionTracker, section_lines};
