//! Editor settings shared by every section operation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the section edited when no configuration says otherwise.
pub const DEFAULT_SECTION: &str = "Components";

/// Prefix written in front of every inserted entry.
pub const DEFAULT_INDENT: &str = "  ";

/// Settings for locating and editing the target section.
///
/// Every field has a default, so an empty config file is valid:
///
/// ```toml
/// section = "Components"
/// indent = "  "
/// max_line_len = 1000
/// max_section_name_len = 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Section whose body is matched, inserted into and deleted from.
    pub section: String,
    /// Text placed before the entry string on an inserted line.
    pub indent: String,
    /// Longest accepted line in bytes, excluding the `\n`. Unlimited if unset.
    pub max_line_len: Option<usize>,
    /// Longest accepted header name in bytes. Unlimited if unset.
    pub max_section_name_len: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            section: DEFAULT_SECTION.to_string(),
            indent: DEFAULT_INDENT.to_string(),
            max_line_len: None,
            max_section_name_len: None,
        }
    }
}

impl EditorConfig {
    /// Target a different section, keeping the other settings.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Check that `section` can name a header at all.
    ///
    /// Headers only carry non-empty ASCII alphanumeric names; `Components.X64`
    /// can never match one.
    pub fn validate(&self) -> Result<()> {
        if self.section.is_empty() || !self.section.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(Error::InvalidSection {
                name: self.section.clone(),
            });
        }
        Ok(())
    }

    /// The text of a new entry line, without terminator.
    pub fn entry_text(&self, entry: &str) -> Vec<u8> {
        let mut line = Vec::with_capacity(self.indent.len() + entry.len() + 2);
        line.extend_from_slice(self.indent.as_bytes());
        line.extend_from_slice(entry.as_bytes());
        line
    }
}
