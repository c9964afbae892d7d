//! Error types for dsc-section

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Placeholder path for errors raised while reading an in-memory stream.
pub(crate) const INPUT_LABEL: &str = "<input>";
/// Placeholder path for errors raised while writing an in-memory stream.
pub(crate) const OUTPUT_LABEL: &str = "<output>";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] dsc_fs::Error),

    #[error("Failed to read file: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} is at least {len} bytes long, exceeding the limit of {max}")]
    LineTooLong { line: usize, len: usize, max: usize },

    #[error("Section name on line {line} is {len} bytes long, exceeding the limit of {max}")]
    SectionNameTooLong { line: usize, len: usize, max: usize },

    #[error("Invalid section name \"{name}\": headers can only name ASCII letters and digits")]
    InvalidSection { name: String },
}

impl Error {
    pub(crate) fn read(source: std::io::Error) -> Self {
        Self::Read {
            path: PathBuf::from(INPUT_LABEL),
            source,
        }
    }

    pub(crate) fn write(source: std::io::Error) -> Self {
        Self::Write {
            path: PathBuf::from(OUTPUT_LABEL),
            source,
        }
    }

    /// Replace stream placeholders with the real file paths.
    pub(crate) fn at(self, input: &Path, output: Option<&Path>) -> Self {
        match self {
            Self::Read { source, .. } => Self::Read {
                path: input.to_path_buf(),
                source,
            },
            Self::Write { path, source } => Self::Write {
                path: output.map(Path::to_path_buf).unwrap_or(path),
                source,
            },
            other => other,
        }
    }
}
