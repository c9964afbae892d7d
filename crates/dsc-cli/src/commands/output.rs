//! Terminal rendering shared by the commands

use std::path::Path;

use colored::{ColoredString, Colorize};
use dsc_section::{LineReport, Preview};
use similar::TextDiff;

use crate::error::Result;

/// What happened to a reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Check,
    Add,
    Delete,
}

impl Action {
    /// Name used in JSON reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Check => "check",
            Action::Add => "add",
            Action::Delete => "delete",
        }
    }

    fn tag(self) -> ColoredString {
        match self {
            Action::Check => "CHK".cyan(),
            Action::Add => "ADD".green(),
            Action::Delete => "DEL".red(),
        }
    }
}

pub fn print_banner(file: &Path, entry: &str) {
    println!("Filename: {}", file.display());
    println!("String  : \"{}\"", entry);
}

/// Print one `TAG[nnnn]: content` row per line.
pub fn print_lines(action: Action, lines: &[LineReport]) {
    for line in lines {
        println!("{}[{:>4}]: {}", action.tag(), line.line_number, line.content);
    }
}

pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a unified diff between the file as read and the would-be result.
pub fn print_diff(file: &Path, preview: &Preview) {
    if preview.is_unchanged() {
        println!("{} No changes to write.", "OK".green().bold());
        return;
    }

    let old = String::from_utf8_lossy(&preview.original);
    let new = String::from_utf8_lossy(&preview.edited);
    let name = file.display().to_string();
    let diff = TextDiff::from_lines(old.as_ref(), new.as_ref());
    let rendered = diff
        .unified_diff()
        .context_radius(3)
        .header(&name, &name)
        .to_string();

    println!();
    for line in rendered.lines() {
        println!("{}", style_diff_line(line));
    }
    println!();
    println!("{} nothing written (dry run)", "=>".blue().bold());
}

fn style_diff_line(line: &str) -> ColoredString {
    if line.starts_with("+++") || line.starts_with("---") {
        line.bold()
    } else if line.starts_with("@@") {
        line.cyan()
    } else if line.starts_with('+') {
        line.green()
    } else if line.starts_with('-') {
        line.red()
    } else {
        line.normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names() {
        assert_eq!(Action::Check.as_str(), "check");
        assert_eq!(Action::Add.as_str(), "add");
        assert_eq!(Action::Delete.as_str(), "delete");
    }

    #[test]
    fn diff_lines_keep_their_text() {
        for line in ["+++ a", "--- a", "@@ -1 +1 @@", "+x", "-y", " z"] {
            assert!(style_diff_line(line).to_string().contains(line));
        }
    }
}
