//! Domain layer: configuration documents and the rules relating them.
//!
//! Nothing in here touches the file system.  Documents arrive as text (or as
//! already-parsed [`serde_json::Value`]s) and leave as values or JSON text.
//!
//! - **`kind`**   – Coarse value classification used for every type comparison.
//! - **`config`** – The reference and user documents.
//! - **`check`**  – Validation rules, applied in a fixed fail-fast order.
//! - **`merge`**  – Copying missing entries from the reference into the user
//!   document.

pub mod check;
pub mod config;
pub mod kind;
pub mod merge;
