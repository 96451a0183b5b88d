//! Validation rules relating a user configuration to its reference.
//!
//! The rules run in a fixed order and stop at the first failure:
//!
//! 1. [`check_documentation`] – every reference key is described in `_notes`.
//! 2. [`check_forward`]       – reference → user: kinds match, nested mappings
//!    carry every reference sub-key with a matching kind.
//! 3. [`check_backward`]      – user → reference: no unknown keys.
//!
//! Creating a missing user file happens between steps 1 and 2 and is the
//! caller's business, so [`check_user_config`] covers steps 2 and 3 only.
//!
//! Nested mappings are compared one level deep.  Values below a sub-key are
//! compared by kind only, never recursively.

use serde_json::Value;
use tracing::warn;

use crate::domain::config::{ReferenceConfig, UserConfig};
use crate::domain::kind::ValueKind;
use crate::error::ConfigError;

/// A reference key the user configuration does not set.
///
/// Not an error: the application falls back to `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingEntry {
    pub key: String,
    pub default: Value,
}

/// Outcome of a successful validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Reference keys absent (or `null`) in the user configuration.
    pub missing: Vec<MissingEntry>,
}

impl ValidationReport {
    /// Returns `true` when the user configuration sets every reference key.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Fails on the first reference key with no `_notes` entry.
///
/// # Errors
///
/// Returns [`ConfigError::MissingDocumentation`] naming the key.
pub fn check_documentation(reference: &ReferenceConfig) -> Result<(), ConfigError> {
    match reference
        .settings()
        .find(|(key, _)| !reference.is_documented(key))
    {
        Some((key, _)) => Err(ConfigError::MissingDocumentation { key: key.clone() }),
        None => Ok(()),
    }
}

/// Compares every reference key against the user configuration.
///
/// Keys the user does not set are logged and returned; they are not fatal.
///
/// # Errors
///
/// Returns [`ConfigError::TypeMismatch`], [`ConfigError::MissingSubKey`] or
/// [`ConfigError::NestedTypeMismatch`] for the first offending key.
pub fn check_forward(
    reference: &ReferenceConfig,
    user: &UserConfig,
) -> Result<Vec<MissingEntry>, ConfigError> {
    let mut missing = Vec::new();

    for (key, expected) in reference.settings() {
        let Some(actual) = user.get_set(key) else {
            warn!("entry missing in user config file: {key}. Will default to: {expected}");
            missing.push(MissingEntry {
                key: key.clone(),
                default: expected.clone(),
            });
            continue;
        };

        if !ValueKind::same(actual, expected) {
            return Err(ConfigError::TypeMismatch {
                key: key.clone(),
                actual_kind: ValueKind::of(actual),
                actual: actual.to_string(),
                expected_kind: ValueKind::of(expected),
                expected: expected.to_string(),
            });
        }

        if let (Value::Object(expected_map), Value::Object(actual_map)) = (expected, actual) {
            for (sub_key, expected_sub) in expected_map {
                let Some(actual_sub) = actual_map.get(sub_key) else {
                    return Err(ConfigError::MissingSubKey {
                        key: key.clone(),
                        sub_key: sub_key.clone(),
                        default: expected_sub.to_string(),
                    });
                };
                if !ValueKind::same(actual_sub, expected_sub) {
                    return Err(ConfigError::NestedTypeMismatch {
                        key: key.clone(),
                        sub_key: sub_key.clone(),
                        actual_kind: ValueKind::of(actual_sub),
                        actual: actual_sub.to_string(),
                        expected_kind: ValueKind::of(expected_sub),
                        expected: expected_sub.to_string(),
                    });
                }
            }
        }
    }

    Ok(missing)
}

/// Fails on the first user key the reference does not define.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownKey`] naming the key and both documents.
pub fn check_backward(reference: &ReferenceConfig, user: &UserConfig) -> Result<(), ConfigError> {
    match user.keys().find(|key| !reference.contains_key(key)) {
        Some(key) => Err(ConfigError::UnknownKey {
            key: key.clone(),
            user: user.origin().to_string(),
            sample: reference.origin().to_string(),
        }),
        None => Ok(()),
    }
}

/// Runs the forward check, then the backward check.
///
/// # Errors
///
/// Propagates the first failure of either check.
pub fn check_user_config(
    reference: &ReferenceConfig,
    user: &UserConfig,
) -> Result<ValidationReport, ConfigError> {
    let missing = check_forward(reference, user)?;
    check_backward(reference, user)?;
    Ok(ValidationReport { missing })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reference(value: Value) -> ReferenceConfig {
        ReferenceConfig::from_value(value, "generic.json.sample").expect("object")
    }

    fn user(value: Value) -> UserConfig {
        UserConfig::from_value(value, "generic.json").expect("object")
    }

    // ── documentation ─────────────────────────────────────────────────────────

    #[test]
    fn test_documentation_passes_when_every_key_has_notes() {
        let r = reference(json!({"a": 1, "b": {"c": 2}, "_notes": {"a": "A", "b": "B"}}));
        assert!(check_documentation(&r).is_ok());
    }

    #[test]
    fn test_documentation_fails_naming_undocumented_key() {
        // Arrange
        let r = reference(json!({"a": 1, "b": 2, "_notes": {"a": "A"}}));

        // Act
        let err = check_documentation(&r).unwrap_err();

        // Assert
        assert!(matches!(err, ConfigError::MissingDocumentation { ref key } if key == "b"));
    }

    #[test]
    fn test_documentation_only_requires_top_level_keys() {
        let r = reference(json!({"a": {"nested": 1}, "_notes": {"a": "A"}}));
        assert!(check_documentation(&r).is_ok());
    }

    #[test]
    fn test_documentation_fails_when_notes_absent() {
        let r = reference(json!({"a": 1}));
        assert_eq!(check_documentation(&r).unwrap_err().key(), Some("a"));
    }

    // ── forward ───────────────────────────────────────────────────────────────

    #[test]
    fn test_forward_reports_missing_key_without_failing() {
        // Arrange
        let r = reference(json!({"a": 1, "b": 2}));
        let u = user(json!({"a": 1}));

        // Act
        let missing = check_forward(&r, &u).unwrap();

        // Assert
        assert_eq!(
            missing,
            vec![MissingEntry {
                key: "b".to_string(),
                default: json!(2)
            }]
        );
    }

    #[test]
    fn test_forward_treats_null_as_missing() {
        let r = reference(json!({"a": 1}));
        let u = user(json!({"a": null}));
        let missing = check_forward(&r, &u).unwrap();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].key, "a");
    }

    #[test]
    fn test_forward_fails_on_top_level_kind_mismatch() {
        let r = reference(json!({"x": 1}));
        let u = user(json!({"x": "1"}));

        let err = check_forward(&r, &u).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::TypeMismatch {
                ref key,
                actual_kind: ValueKind::String,
                expected_kind: ValueKind::Number,
                ..
            } if key == "x"
        ));
    }

    #[test]
    fn test_forward_distinguishes_boolean_from_number() {
        let r = reference(json!({"x": 1}));
        let u = user(json!({"x": true}));
        assert!(matches!(
            check_forward(&r, &u),
            Err(ConfigError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_forward_accepts_float_where_integer_expected() {
        let r = reference(json!({"x": 1}));
        let u = user(json!({"x": 2.5}));
        assert!(check_forward(&r, &u).unwrap().is_empty());
    }

    #[test]
    fn test_forward_fails_on_missing_sub_key() {
        let r = reference(json!({"a": {"p": 1, "q": 2}}));
        let u = user(json!({"a": {"p": 1}}));

        let err = check_forward(&r, &u).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingSubKey { ref key, ref sub_key, ref default }
                if key == "a" && sub_key == "q" && default == "2"
        ));
    }

    #[test]
    fn test_forward_fails_on_sub_key_kind_mismatch() {
        let r = reference(json!({"a": {"p": "text"}}));
        let u = user(json!({"a": {"p": ["text"]}}));

        let err = check_forward(&r, &u).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::NestedTypeMismatch {
                ref sub_key,
                actual_kind: ValueKind::Sequence,
                expected_kind: ValueKind::String,
                ..
            } if sub_key == "p"
        ));
    }

    #[test]
    fn test_forward_null_sub_value_is_present_but_mismatched() {
        let r = reference(json!({"a": {"p": 1}}));
        let u = user(json!({"a": {"p": null}}));
        assert!(matches!(
            check_forward(&r, &u),
            Err(ConfigError::NestedTypeMismatch {
                actual_kind: ValueKind::Null,
                ..
            })
        ));
    }

    #[test]
    fn test_forward_allows_extra_sub_keys() {
        let r = reference(json!({"a": {"p": 1}}));
        let u = user(json!({"a": {"p": 1, "extra": true}}));
        assert!(check_forward(&r, &u).is_ok());
    }

    #[test]
    fn test_forward_does_not_recurse_below_one_level() {
        // Only the kind of "inner" is compared; its own contents are not.
        let r = reference(json!({"a": {"inner": {"deep": 1, "deeper": {"z": 0}}}}));
        let u = user(json!({"a": {"inner": {"deep": "not a number"}}}));
        assert!(check_forward(&r, &u).is_ok());
    }

    // ── backward ──────────────────────────────────────────────────────────────

    #[test]
    fn test_backward_fails_on_unknown_key() {
        let r = reference(json!({"x": 1}));
        let u = user(json!({"x": 1, "y": 2}));

        let err = check_backward(&r, &u).unwrap_err();

        assert!(matches!(err, ConfigError::UnknownKey { ref key, .. } if key == "y"));
        let msg = err.to_string();
        assert!(msg.contains("generic.json"), "got: {msg}");
        assert!(msg.contains("generic.json.sample"), "got: {msg}");
    }

    #[test]
    fn test_backward_accepts_notes_copied_from_reference() {
        let r = reference(json!({"x": 1, "_notes": {"x": "X"}}));
        let u = user(json!({"x": 1, "_notes": {"x": "X"}}));
        assert!(check_backward(&r, &u).is_ok());
    }

    // ── combined ──────────────────────────────────────────────────────────────

    #[test]
    fn test_check_user_config_runs_forward_before_backward() {
        // Both a kind mismatch and an unknown key: the forward failure wins.
        let r = reference(json!({"x": 1}));
        let u = user(json!({"x": "1", "y": 2}));
        assert!(matches!(
            check_user_config(&r, &u),
            Err(ConfigError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_check_user_config_passes_for_verbatim_copy() {
        let value = json!({"a": 1, "b": {"c": [1]}, "_notes": {"a": "A", "b": "B"}});
        let r = reference(value.clone());
        let u = user(value);

        let report = check_user_config(&r, &u).unwrap();

        assert!(report.is_complete());
    }

    #[test]
    fn test_check_user_config_collects_missing_entries() {
        let r = reference(json!({"a": 1, "b": 2}));
        let u = user(json!({"a": 1}));
        let report = check_user_config(&r, &u).unwrap();
        assert!(!report.is_complete());
        assert_eq!(report.missing[0].key, "b");
    }
}
