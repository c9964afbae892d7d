//! Check command implementation

use std::path::Path;

use dsc_section::{EditorConfig, find_matches_in_file};
use serde_json::json;

use super::output::{Action, print_banner, print_json, print_lines};
use crate::error::{CliError, Result};

/// Run the check command
///
/// Lists the matching entries of the section. Finding none is reported as
/// an error so scripts can branch on the exit status.
pub fn run_check(file: &Path, entry: &str, config: &EditorConfig, json: bool) -> Result<()> {
    if !json {
        print_banner(file, entry);
    }

    let matches = find_matches_in_file(file, entry, config)?;

    if json {
        print_json(&json!({
            "action": Action::Check.as_str(),
            "file": file.display().to_string(),
            "entry": entry,
            "section": config.section,
            "count": matches.len(),
            "lines": matches,
        }))?;
    } else {
        print_lines(Action::Check, &matches);
        println!("{} matched lines", matches.len());
    }

    if matches.is_empty() {
        return Err(CliError::user(format!(
            "No entry starting with \"{}\" in [{}]",
            entry, config.section
        )));
    }
    Ok(())
}
