//! Sidecar file kinds written next to an edited file.

/// Files the editor places beside the source while swapping in an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sidecar {
    /// Freshly written output, renamed over the source on success
    Temp,
    /// Previous version of the source, kept after a successful swap
    Backup,
}

impl Sidecar {
    /// Get the extension appended to the source file name.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Temp => ".tmp",
            Self::Backup => ".bak",
        }
    }
}
