//! Delete command implementation

use std::path::Path;

use colored::Colorize;
use dsc_fs::EditPaths;
use dsc_section::{EditorConfig, delete_entries, preview_delete};
use serde_json::json;

use super::edit_in_place;
use super::output::{Action, print_banner, print_diff, print_json, print_lines};
use crate::error::Result;

/// Run the delete command
///
/// Removes every section entry starting with `entry`. The file is rewritten
/// (with a `.bak` sidecar) even when nothing matched.
pub fn run_delete(
    file: &Path,
    entry: &str,
    config: &EditorConfig,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    if !json {
        print_banner(file, entry);
    }

    let paths = EditPaths::for_source(file);
    let (removed, preview) = if dry_run {
        let (preview, removed) = preview_delete(file, entry, config)?;
        (removed, Some(preview))
    } else {
        let removed = edit_in_place(&paths, |paths| {
            delete_entries(&paths.source, &paths.temp, entry, config)
        })?;
        (removed, None)
    };

    if json {
        return print_json(&json!({
            "action": Action::Delete.as_str(),
            "file": file.display().to_string(),
            "entry": entry,
            "section": config.section,
            "dry_run": dry_run,
            "count": removed.len(),
            "lines": removed,
            "backup": (!dry_run).then(|| paths.backup.display().to_string()),
        }));
    }

    print_lines(Action::Delete, &removed);
    println!("{} deleted lines", removed.len());
    match preview {
        Some(preview) => print_diff(file, &preview),
        None => println!(
            "{} Previous version saved as {}",
            "OK".green().bold(),
            paths.backup.display()
        ),
    }
    Ok(())
}
