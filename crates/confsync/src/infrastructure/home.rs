//! Application base directory resolution.
//!
//! Configuration files live in `<home>/config/`.  The home directory is, in
//! order of preference:
//!
//! 1. An explicit directory (the CLI's `--home`, which clap also fills from
//!    `CONFSYNC_HOME`).
//! 2. The current working directory.

use std::path::PathBuf;

use crate::infrastructure::storage::StorageError;

/// Name of the directory under home holding the configuration files.
pub const CONFIG_DIR_NAME: &str = "config";

/// Resolves the application base directory.
///
/// # Errors
///
/// Returns [`StorageError::NoHomeDir`] when no explicit directory is given and
/// the current working directory cannot be determined.
pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf, StorageError> {
    match explicit {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().map_err(|_| StorageError::NoHomeDir),
    }
}
