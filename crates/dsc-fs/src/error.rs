//! Error types for dsc-fs

use std::path::PathBuf;

/// Result type for dsc-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dsc-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open file for read: {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open file for write: {path}: {source}")]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path the failed operation was acting on, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::SourceUnreadable { path, .. }
            | Self::DestinationUnwritable { path, .. }
            | Self::Io { path, .. }
            | Self::ConfigParse { path, .. } => Some(path),
            Self::UnsupportedFormat { .. } => None,
        }
    }
}
