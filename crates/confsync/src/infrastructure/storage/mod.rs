//! Configuration file storage.
//!
//! The use cases see files only through [`ConfigStore`], keyed by
//! configuration name (e.g. `generic`).  Two implementations exist:
//!
//! | Type                  | Backing                                        |
//! |-----------------------|------------------------------------------------|
//! | [`FsConfigStore`]     | `<home>/config/<name>.json[.sample]` on disk   |
//! | [`MemoryConfigStore`] | In-process map, for tests                      |
//!
//! Every operation opens, reads or writes, and closes its file before
//! returning.  Nothing is locked; concurrent writers race and the last one
//! wins.

mod fs;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use fs::FsConfigStore;
pub use memory::MemoryConfigStore;

/// Error type for configuration storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The application base directory could not be determined.
    #[error("could not determine the application home directory")]
    NoHomeDir,

    /// A required document does not exist.
    #[error("config not found at {location}")]
    NotFound { location: String },

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Access to the reference (`.json.sample`) and user (`.json`) documents of
/// named configurations.
pub trait ConfigStore {
    /// Human-readable location of the reference document, used in messages.
    fn reference_location(&self, name: &str) -> String;

    /// Human-readable location of the user document, used in messages.
    fn user_location(&self, name: &str) -> String;

    /// Reads the reference document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if it does not exist, or
    /// [`StorageError::Io`] if it cannot be read.
    fn read_reference(&self, name: &str) -> Result<String, StorageError>;

    /// Reads the user document, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file exists but cannot be read.
    fn read_user(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the user document with `contents`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file cannot be written.
    fn write_user(&self, name: &str, contents: &str) -> Result<(), StorageError>;
}
