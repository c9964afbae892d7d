//! Add command implementation

use std::path::Path;

use colored::Colorize;
use dsc_fs::EditPaths;
use dsc_section::{EditorConfig, insert_entry, preview_insert};
use serde_json::json;

use super::edit_in_place;
use super::output::{Action, print_banner, print_diff, print_json, print_lines};
use crate::error::Result;

/// Run the add command
///
/// Appends `entry` to the section body, keeping the previous file as a
/// `.bak` sidecar. With `dry_run` the result is only shown as a diff.
pub fn run_add(
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
    let (added, preview) = if dry_run {
        let (preview, added) = preview_insert(file, entry, config)?;
        (added, Some(preview))
    } else {
        let added = edit_in_place(&paths, |paths| {
            insert_entry(&paths.source, &paths.temp, entry, config)
        })?;
        (added, None)
    };

    if json {
        return print_json(&json!({
            "action": Action::Add.as_str(),
            "file": file.display().to_string(),
            "entry": entry,
            "section": config.section,
            "dry_run": dry_run,
            "lines": [&added],
            "backup": (!dry_run).then(|| paths.backup.display().to_string()),
        }));
    }

    print_lines(Action::Add, std::slice::from_ref(&added));
    match preview {
        Some(preview) => print_diff(file, &preview),
        None => println!(
            "{} Entry added (previous version saved as {})",
            "OK".green().bold(),
            paths.backup.display()
        ),
    }
    Ok(())
}
