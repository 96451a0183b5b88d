//! Infrastructure layer for confsync.
//!
//! - **`home`**    – Resolves the application base directory under which the
//!   `config/` directory lives.
//! - **`storage`** – Reads the reference and user documents and writes the
//!   user document back.

pub mod home;
pub mod storage;
