//! Line classification for DSC files.
//!
//! Lines are raw bytes so that files in any encoding are copied through
//! untouched. Whitespace follows the C locale: space, `\t`, `\n`, `\v`,
//! `\f` and `\r`.

use regex::bytes::Regex;
use std::sync::LazyLock;

/// Regex for section header lines.
/// Only ASCII alphanumeric names are headers; `[Foo Bar]` and `[Foo-1]` are not.
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^[\t\n\x0B\x0C\r ]*\[([0-9A-Za-z]*)\]").expect("Invalid header regex")
});

fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0B
}

fn trim_leading_space(line: &[u8]) -> &[u8] {
    let start = line.iter().position(|&b| !is_space(b)).unwrap_or(line.len());
    &line[start..]
}

/// Extracts the section name if the line is a section header.
///
/// Anything may follow the closing bracket. An empty name (`[]`) still
/// counts as a header.
///
/// # Example
/// ```
/// use dsc_section::classify::section_name;
///
/// assert_eq!(section_name(b"  [Components.X64]\n"), None);
/// assert_eq!(section_name(b"[Components] # main\n"), Some("Components"));
/// assert_eq!(section_name(b"[Foo Bar]\n"), None);
/// ```
pub fn section_name(line: &[u8]) -> Option<&str> {
    let caps = HEADER_REGEX.captures(line)?;
    std::str::from_utf8(caps.get(1)?.as_bytes()).ok()
}

/// Returns `true` if the line holds nothing but whitespace.
pub fn is_blank(line: &[u8]) -> bool {
    line.iter().all(|&b| is_space(b))
}

/// Returns `true` if the line, after its leading whitespace, starts with `target`.
///
/// An empty target matches every line.
pub fn matches_prefix(line: &[u8], target: &[u8]) -> bool {
    trim_leading_space(line).starts_with(target)
}
