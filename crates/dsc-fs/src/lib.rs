//! Filesystem glue for dscfile
//!
//! Names the sidecar files of an in-place edit, opens the source and
//! destination streams, swaps an edited file into place with a backup of the
//! previous version, and loads configuration files.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::Sidecar;
pub use error::{Error, Result};
pub use path::{EditPaths, sidecar_path};
