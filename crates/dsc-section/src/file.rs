//! File-level entry points.
//!
//! These open the source (and destination) and run the streaming
//! operations. Writing goes to the destination only; swapping it over the
//! source is left to the caller, as is cleaning up a partial destination
//! after an error.

use std::io::Read;
use std::path::Path;

use dsc_fs::io;

use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::reader::LineReport;
use crate::{find_matches, insert, remove};

/// Lists the matching entry lines of the target section in `source`.
pub fn find_matches_in_file(
    source: &Path,
    target: &str,
    config: &EditorConfig,
) -> Result<Vec<LineReport>> {
    let reader = io::open_source(source)?;
    let matches = find_matches(reader, target, config).map_err(|e| e.at(source, None))?;
    tracing::info!(path = %source.display(), count = matches.len(), "Checked entries");
    Ok(matches)
}

/// Counts the matching entry lines of the target section in `source`.
///
/// Zero is a valid count, not an error.
pub fn count_matches(source: &Path, target: &str, config: &EditorConfig) -> Result<usize> {
    find_matches_in_file(source, target, config).map(|matches| matches.len())
}

/// Writes `source` with `entry` inserted into the target section to `dest`.
pub fn insert_entry(
    source: &Path,
    dest: &Path,
    entry: &str,
    config: &EditorConfig,
) -> Result<LineReport> {
    config.validate()?;
    let reader = io::open_source(source)?;
    let mut writer = io::create_destination(dest)?;
    let inserted =
        insert(reader, &mut writer, entry, config).map_err(|e| e.at(source, Some(dest)))?;
    io::finish_destination(writer, dest)?;
    tracing::info!(path = %source.display(), line = inserted.line_number, "Inserted entry");
    Ok(inserted)
}

/// Writes `source` without the matching entries of the target section to `dest`.
pub fn delete_entries(
    source: &Path,
    dest: &Path,
    target: &str,
    config: &EditorConfig,
) -> Result<Vec<LineReport>> {
    config.validate()?;
    let reader = io::open_source(source)?;
    let mut writer = io::create_destination(dest)?;
    let removed =
        remove(reader, &mut writer, target, config).map_err(|e| e.at(source, Some(dest)))?;
    io::finish_destination(writer, dest)?;
    tracing::info!(path = %source.display(), count = removed.len(), "Deleted entries");
    Ok(removed)
}

/// An edit computed in memory without touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Bytes of the source as read.
    pub original: Vec<u8>,
    /// Bytes the edit would write.
    pub edited: Vec<u8>,
}

impl Preview {
    /// Whether the edit would change the file.
    pub fn is_unchanged(&self) -> bool {
        self.original == self.edited
    }
}

fn read_source(source: &Path) -> Result<Vec<u8>> {
    let mut reader = io::open_source(source)?;
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source_err| Error::Read {
            path: source.to_path_buf(),
            source: source_err,
        })?;
    Ok(bytes)
}

/// Runs [`insert`] on `source` into memory.
pub fn preview_insert(
    source: &Path,
    entry: &str,
    config: &EditorConfig,
) -> Result<(Preview, LineReport)> {
    let original = read_source(source)?;
    let mut edited = Vec::with_capacity(original.len() + entry.len() + config.indent.len() + 1);
    let inserted =
        insert(&original[..], &mut edited, entry, config).map_err(|e| e.at(source, None))?;
    Ok((Preview { original, edited }, inserted))
}

/// Runs [`remove`] on `source` into memory.
pub fn preview_delete(
    source: &Path,
    target: &str,
    config: &EditorConfig,
) -> Result<(Preview, Vec<LineReport>)> {
    let original = read_source(source)?;
    let mut edited = Vec::with_capacity(original.len());
    let removed =
        remove(&original[..], &mut edited, target, config).map_err(|e| e.at(source, None))?;
    Ok((Preview { original, edited }, removed))
}
