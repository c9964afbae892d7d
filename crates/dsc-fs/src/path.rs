//! Sidecar path naming for in-place edits

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::Sidecar;

/// The three paths involved in editing a file in place.
///
/// Sidecars live in the same directory as the source so the final
/// renames never cross a filesystem boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPaths {
    /// The file being edited
    pub source: PathBuf,
    /// Where the edited output is written first
    pub temp: PathBuf,
    /// Where the previous version is kept after the swap
    pub backup: PathBuf,
}

impl EditPaths {
    /// Derive the temp and backup paths for a source file.
    pub fn for_source(source: impl AsRef<Path>) -> Self {
        let source = source.as_ref().to_path_buf();
        Self {
            temp: sidecar_path(&source, Sidecar::Temp),
            backup: sidecar_path(&source, Sidecar::Backup),
            source,
        }
    }
}

/// Append a sidecar extension to the full file name (`a.dsc` -> `a.dsc.bak`).
pub fn sidecar_path(source: &Path, kind: Sidecar) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(kind.extension());
    PathBuf::from(name)
}
