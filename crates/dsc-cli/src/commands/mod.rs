//! Command implementations for dsc-cli

pub mod add;
pub mod check;
pub mod delete;
pub mod output;

use std::path::Path;

use dsc_fs::{ConfigStore, EditPaths, io};
use dsc_section::EditorConfig;

use crate::error::Result;

pub use add::run_add;
pub use check::run_check;
pub use delete::run_delete;

/// Load the editor settings, falling back to defaults without a file.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => {
            let config: EditorConfig = ConfigStore::new().load(path)?;
            config.validate()?;
            tracing::debug!(path = %path.display(), section = %config.section, "Loaded config");
            Ok(config)
        }
        None => Ok(EditorConfig::default()),
    }
}

/// Run `edit` into the temp sidecar, then swap it over the source.
///
/// The temp file is removed whenever the edit or the swap fails.
pub(crate) fn edit_in_place<T>(
    paths: &EditPaths,
    edit: impl FnOnce(&EditPaths) -> dsc_section::Result<T>,
) -> Result<T> {
    let outcome = match edit(paths) {
        Ok(outcome) => outcome,
        Err(e) => {
            io::discard(&paths.temp);
            return Err(e.into());
        }
    };

    if let Err(e) = io::replace_with_backup(paths) {
        io::discard(&paths.temp);
        return Err(e.into());
    }
    Ok(outcome)
}
