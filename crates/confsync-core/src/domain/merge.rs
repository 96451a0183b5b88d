//! Copying missing entries from the reference into a user configuration.
//!
//! Only absence is repaired.  A key present in both documents with different
//! kinds is left alone; reporting it is the job of [`crate::domain::check`].

use serde_json::Value;
use tracing::info;

use crate::domain::config::{ReferenceConfig, UserConfig};

/// One entry copied from the reference into the user configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addition {
    /// Top-level key.
    pub key: String,
    /// Set when only a sub-key of the nested mapping at `key` was added.
    pub sub_key: Option<String>,
    /// The reference's `_notes` text for `key`.  Always `None` for sub-keys.
    pub description: Option<String>,
}

/// Fills in every reference key and sub-key the user configuration lacks.
///
/// A top-level key set to `null` counts as missing.  Sub-keys are filled only
/// when both documents hold a mapping at `key`.
///
/// Returns the merged configuration and the additions made, in reference key
/// order.  An empty list means the configuration was already complete.
pub fn fill_missing_entries(
    reference: &ReferenceConfig,
    mut user: UserConfig,
) -> (UserConfig, Vec<Addition>) {
    let mut additions = Vec::new();
    let origin = user.origin().to_string();
    let entries = user.entries_mut();

    for (key, expected) in reference.settings() {
        match entries.get_mut(key) {
            None | Some(Value::Null) => {
                info!("{key} was missing in {origin}, adding it");
                entries.insert(key.clone(), expected.clone());
                additions.push(Addition {
                    key: key.clone(),
                    sub_key: None,
                    description: reference.description(key),
                });
            }
            Some(Value::Object(actual_map)) => {
                let Value::Object(expected_map) = expected else {
                    continue;
                };
                for (sub_key, expected_sub) in expected_map {
                    if actual_map.contains_key(sub_key) {
                        continue;
                    }
                    info!("{sub_key} was missing in {key} from {origin}, adding it");
                    actual_map.insert(sub_key.clone(), expected_sub.clone());
                    additions.push(Addition {
                        key: key.clone(),
                        sub_key: Some(sub_key.clone()),
                        description: None,
                    });
                }
            }
            Some(_) => {}
        }
    }

    (user, additions)
}
