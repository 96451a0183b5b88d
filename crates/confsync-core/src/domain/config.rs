//! Reference and user configuration documents.
//!
//! Both documents are JSON objects at the top level.  The reference (the
//! `.json.sample` file shipped with the application) additionally carries a
//! reserved `_notes` key mapping every other key to a description.
//!
//! Objects are held in `serde_json::Map`, which keeps keys sorted.  Iteration
//! order is therefore alphabetical, and pretty-printed output has sorted keys
//! at every depth.

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::kind::ValueKind;
use crate::error::ConfigError;

/// Reserved reference key holding per-key documentation.
pub const NOTES_KEY: &str = "_notes";

/// Parses `text` into a top-level JSON object.
fn parse_object(text: &str, origin: &str) -> Result<Map<String, Value>, ConfigError> {
    let value: Value = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    into_object(value, origin)
}

fn into_object(value: Value, origin: &str) -> Result<Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfigError::NotAnObject {
            origin: origin.to_string(),
            kind: ValueKind::of(&other),
        }),
    }
}

// ── Reference ─────────────────────────────────────────────────────────────────

/// The authoritative sample configuration: every valid key, its default value,
/// and its documentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceConfig {
    origin: String,
    entries: Map<String, Value>,
}

impl ReferenceConfig {
    /// Parses a reference document.
    ///
    /// `origin` names the document in error messages (typically its path).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid JSON and
    /// [`ConfigError::NotAnObject`] when the top level is not an object.
    pub fn parse(text: &str, origin: impl Into<String>) -> Result<Self, ConfigError> {
        let origin = origin.into();
        let entries = parse_object(text, &origin)?;
        Ok(Self { origin, entries })
    }

    /// Wraps an already-parsed reference document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAnObject`] when `value` is not an object.
    pub fn from_value(value: Value, origin: impl Into<String>) -> Result<Self, ConfigError> {
        let origin = origin.into();
        let entries = into_object(value, &origin)?;
        Ok(Self { origin, entries })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Iterates over every configurable entry, skipping `_notes`.
    pub fn settings(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter().filter(|(key, _)| key.as_str() != NOTES_KEY)
    }

    /// Looks up a key, `_notes` included.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if the reference defines `key`.  `_notes` counts as
    /// defined so that a verbatim copy of the reference passes validation.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The documentation map, or `None` if `_notes` is absent or not an object.
    pub fn notes(&self) -> Option<&Map<String, Value>> {
        self.entries.get(NOTES_KEY).and_then(Value::as_object)
    }

    pub fn is_documented(&self, key: &str) -> bool {
        self.notes().is_some_and(|notes| notes.contains_key(key))
    }

    /// The description of `key` from `_notes`.
    ///
    /// Non-string notes are rendered as compact JSON.
    pub fn description(&self, key: &str) -> Option<String> {
        self.notes()?.get(key).map(|note| match note {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    /// The reference as a JSON value, `_notes` included.
    pub fn to_value(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    /// Compact JSON rendering of the whole reference, used when seeding a
    /// user configuration that does not exist yet.
    pub fn to_compact_json(&self) -> String {
        self.to_value().to_string()
    }
}

// ── User ──────────────────────────────────────────────────────────────────────

/// The deployment-specific configuration checked and healed against the
/// reference.
#[derive(Debug, Clone, PartialEq)]
pub struct UserConfig {
    origin: String,
    entries: Map<String, Value>,
}

impl UserConfig {
    /// Parses a user document strictly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid JSON and
    /// [`ConfigError::NotAnObject`] when the top level is not an object.
    pub fn parse(text: &str, origin: impl Into<String>) -> Result<Self, ConfigError> {
        let origin = origin.into();
        let entries = parse_object(text, &origin)?;
        Ok(Self { origin, entries })
    }

    /// Parses a user document, falling back to an empty configuration when the
    /// text is not a JSON object.
    pub fn parse_lenient(text: &str, origin: impl Into<String>) -> Self {
        let origin = origin.into();
        match parse_object(text, &origin) {
            Ok(entries) => Self { origin, entries },
            Err(e) => {
                debug!("treating {origin} as empty: {e}");
                Self::empty(origin)
            }
        }
    }

    /// Wraps an already-parsed user document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAnObject`] when `value` is not an object.
    pub fn from_value(value: Value, origin: impl Into<String>) -> Result<Self, ConfigError> {
        let origin = origin.into();
        let entries = into_object(value, &origin)?;
        Ok(Self { origin, entries })
    }

    /// An empty configuration.
    pub fn empty(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            entries: Map::new(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Looks up a key, treating an explicit `null` as absent.
    pub fn get_set(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).filter(|value| !value.is_null())
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.entries
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    /// Renders the configuration with two-space indentation, sorted keys, and
    /// a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if rendering fails.
    pub fn to_pretty_json(&self) -> Result<String, ConfigError> {
        let mut text =
            serde_json::to_string_pretty(&self.entries).map_err(|source| ConfigError::Serialize {
                origin: self.origin.clone(),
                source,
            })?;
        text.push('\n');
        Ok(text)
    }
}
