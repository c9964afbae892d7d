//! Stream opening and rename-based replacement

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::{EditPaths, Error, Result};

/// Open the file being edited for buffered reading.
pub fn open_source(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Create (or truncate) the destination file for buffered writing.
pub fn create_destination(path: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| Error::DestinationUnwritable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(BufWriter::new(file))
}

/// Flush a destination writer and sync it to disk.
///
/// Dropping a `BufWriter` swallows flush errors, so every successful write
/// path goes through here before the file is swapped into place.
pub fn finish_destination(writer: BufWriter<File>, path: &Path) -> Result<()> {
    let file = writer
        .into_inner()
        .map_err(|e| Error::io(path, e.into_error()))?;
    file.sync_all().map_err(|e| Error::io(path, e))
}

/// Swap the edited temp file into place, keeping the old source as backup.
///
/// Any previous backup is removed first. If the final rename fails the
/// backup is moved back so the source path is never left empty.
pub fn replace_with_backup(paths: &EditPaths) -> Result<()> {
    if paths.backup.exists() {
        fs::remove_file(&paths.backup).map_err(|e| Error::io(&paths.backup, e))?;
        tracing::debug!(backup = %paths.backup.display(), "Removed stale backup");
    }

    fs::rename(&paths.source, &paths.backup).map_err(|e| Error::io(&paths.source, e))?;

    if let Err(e) = fs::rename(&paths.temp, &paths.source) {
        if let Err(restore) = fs::rename(&paths.backup, &paths.source) {
            tracing::error!(
                backup = %paths.backup.display(),
                error = %restore,
                "Failed to restore source from backup"
            );
        }
        return Err(Error::io(&paths.temp, e));
    }

    tracing::debug!(
        source = %paths.source.display(),
        backup = %paths.backup.display(),
        "Replaced source with edited output"
    );
    Ok(())
}

/// Remove partial output left behind by a failed edit.
///
/// Missing files are not an error.
pub fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "Discarded partial output"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to discard partial output"),
    }
}

