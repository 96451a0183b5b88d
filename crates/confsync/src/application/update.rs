//! Updater: copies missing entries from the reference into the user file.
//!
//! The updater never fails because of what the user file contains.  A missing,
//! unreadable, or malformed user file is treated as an empty configuration and
//! repopulated from the reference.  Kind mismatches are left for the validator
//! to report.

use confsync_core::{fill_missing_entries, Addition, ReferenceConfig, UserConfig};
use tracing::{info, warn};

use crate::application::AppError;
use crate::infrastructure::storage::ConfigStore;

/// What the updater did to one configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigUpdate {
    /// Configuration name, e.g. `generic`.
    pub name: String,
    /// Where the user file lives.
    pub location: String,
    /// Entries copied from the reference, in reference key order.
    pub additions: Vec<Addition>,
}

impl ConfigUpdate {
    /// Returns `true` if the user file gained at least one entry (and was
    /// rewritten).
    pub fn has_new_entry(&self) -> bool {
        !self.additions.is_empty()
    }

    /// Human-readable lines describing each addition.
    pub fn notices(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for addition in &self.additions {
            match &addition.sub_key {
                None => {
                    lines.push(format!(
                        "{} was missing in {}, adding it.",
                        addition.key, self.name
                    ));
                    lines.push(format!(
                        "Description: {}",
                        addition.description.as_deref().unwrap_or("(undocumented)")
                    ));
                }
                Some(sub_key) => lines.push(format!(
                    "{sub_key} was missing in {} from {}, adding it.",
                    addition.key, self.name
                )),
            }
        }
        lines
    }

    /// The lines printed for this file: one per addition, or a single
    /// "no updates needed" line when nothing changed.
    pub fn summary(&self) -> Vec<String> {
        if self.has_new_entry() {
            self.notices()
        } else {
            vec![format!("No updates needed in {}.", self.location)]
        }
    }
}

/// Result of updating a set of configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub configs: Vec<ConfigUpdate>,
}

impl UpdateReport {
    /// Returns `true` if any configuration gained an entry.
    pub fn has_new_entry(&self) -> bool {
        self.configs.iter().any(ConfigUpdate::has_new_entry)
    }
}

/// Fills the user configuration called `name` with missing reference entries,
/// rewriting it when anything was added.
///
/// # Errors
///
/// Returns [`AppError`] if the reference cannot be read or parsed, or if the
/// merged user file cannot be written.
pub fn update_config<S>(store: &S, name: &str) -> Result<ConfigUpdate, AppError>
where
    S: ConfigStore + ?Sized,
{
    let location = store.user_location(name);
    let user = match store.read_user(name) {
        Ok(Some(text)) => UserConfig::parse_lenient(&text, location.clone()),
        Ok(None) => UserConfig::empty(location.clone()),
        Err(e) => {
            warn!("could not read {location}, starting from an empty config: {e}");
            UserConfig::empty(location.clone())
        }
    };

    let reference =
        ReferenceConfig::parse(&store.read_reference(name)?, store.reference_location(name))?;

    let (merged, additions) = fill_missing_entries(&reference, user);
    if !additions.is_empty() {
        store.write_user(name, &merged.to_pretty_json()?)?;
        info!("wrote {} new entries to {location}", additions.len());
    }

    Ok(ConfigUpdate {
        name: name.to_string(),
        location,
        additions,
    })
}

/// Runs [`update_config`] for every name in turn.
///
/// # Errors
///
/// Stops at the first configuration that fails; earlier files stay updated.
pub fn update_configs<S, I>(store: &S, names: I) -> Result<UpdateReport, AppError>
where
    S: ConfigStore + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut report = UpdateReport::default();
    for name in names {
        report.configs.push(update_config(store, name.as_ref())?);
    }
    Ok(report)
}
