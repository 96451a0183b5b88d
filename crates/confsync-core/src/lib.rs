//! # confsync-core
//!
//! Comparison and merge logic for a JSON user configuration and the "sample"
//! reference configuration shipped alongside it.
//!
//! This crate does no file I/O.  It parses documents handed to it as text,
//! classifies values into coarse kinds, and answers two questions:
//!
//! - **`domain::check`** – Does the user configuration have the same keys and
//!   value kinds as the reference (one level into nested mappings)?  Is every
//!   reference key documented in `_notes`?
//!
//! - **`domain::merge`** – Which keys and sub-keys does the user configuration
//!   lack, and what does it look like once they are copied in from the
//!   reference?
//!
//! Reading and writing the files, and deciding when to do so, belongs to the
//! `confsync` crate.

pub mod domain;
pub mod error;

pub use domain::check::{
    check_backward, check_documentation, check_forward, check_user_config, MissingEntry,
    ValidationReport,
};
pub use domain::config::{ReferenceConfig, UserConfig, NOTES_KEY};
pub use domain::kind::ValueKind;
pub use domain::merge::{fill_missing_entries, Addition};
pub use error::ConfigError;
