//! Application layer use cases.
//!
//! - **`validate`** – Check the user configuration against the reference,
//!   creating it from the reference first if it does not exist.
//! - **`update`**   – Copy missing keys and sub-keys from the reference into
//!   the user configuration and persist the result.
//!
//! Both use cases reach the file system only through
//! [`ConfigStore`](crate::infrastructure::storage::ConfigStore).

pub mod update;
pub mod validate;

use confsync_core::ConfigError;
use thiserror::Error;

use crate::infrastructure::storage::StorageError;

/// Error type for the use cases.
#[derive(Debug, Error)]
pub enum AppError {
    /// A document is malformed or does not match its reference.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A configuration file could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
