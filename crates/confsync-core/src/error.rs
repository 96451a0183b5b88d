//! Error type shared by every operation in the crate.

use thiserror::Error;

use crate::domain::kind::ValueKind;

/// A configuration document is malformed or does not line up with its
/// reference.
///
/// Values embedded in messages are rendered as compact JSON.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A reference key has no entry in the reference's `_notes` map.
    #[error("documentation missing for {key}")]
    MissingDocumentation { key: String },

    /// A top-level user value has a different kind than the reference value.
    #[error(
        "invalid type for {key}: got {actual_kind} ({actual}), \
         expected {expected_kind} ({expected})"
    )]
    TypeMismatch {
        key: String,
        actual_kind: ValueKind,
        actual: String,
        expected_kind: ValueKind,
        expected: String,
    },

    /// A sub-key of a nested mapping has a different kind than the reference.
    #[error(
        "invalid type for {sub_key} in {key}: got {actual_kind} ({actual}), \
         expected {expected_kind} ({expected})"
    )]
    NestedTypeMismatch {
        key: String,
        sub_key: String,
        actual_kind: ValueKind,
        actual: String,
        expected_kind: ValueKind,
        expected: String,
    },

    /// A sub-key of a reference mapping is absent from the user's mapping.
    #[error(
        "{sub_key} is missing in {key}; this is probably a new key, update your \
         config file accordingly (default from sample file: {default})"
    )]
    MissingSubKey {
        key: String,
        sub_key: String,
        default: String,
    },

    /// The user configuration has a key the reference does not know about.
    #[error("{key} is missing in the sample config file; compare {user} with {sample}")]
    UnknownKey {
        key: String,
        user: String,
        sample: String,
    },

    /// The document text is not valid JSON.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document is valid JSON but its top level is not an object.
    #[error("{origin} must contain a JSON object at the top level, got {kind}")]
    NotAnObject { origin: String, kind: ValueKind },

    /// The merged document could not be rendered back to JSON.
    #[error("failed to serialize {origin}: {source}")]
    Serialize {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// The top-level key the error is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingDocumentation { key }
            | Self::TypeMismatch { key, .. }
            | Self::NestedTypeMismatch { key, .. }
            | Self::MissingSubKey { key, .. }
            | Self::UnknownKey { key, .. } => Some(key),
            Self::Parse { .. } | Self::NotAnObject { .. } | Self::Serialize { .. } => None,
        }
    }
}
