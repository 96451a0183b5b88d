//! confsync library crate.
//!
//! Keeps a deployed JSON configuration in line with the sample configuration
//! shipped next to it.
//!
//! # Layout
//!
//! ```text
//! confsync
//!   ├── application/      Validator and updater use cases
//!   └── infrastructure/
//!         ├── home        Application base directory resolution
//!         └── storage/    Where `<name>.json` and `<name>.json.sample` live
//! ```
//!
//! The comparison rules themselves live in `confsync-core`; this crate decides
//! which files to read, when to create or rewrite the user file, and what to
//! report.

/// Application layer: validate and update use cases.
pub mod application;

/// Infrastructure layer: home directory and configuration file storage.
pub mod infrastructure;

/// Configuration names handled when none are given explicitly.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["generic"];
