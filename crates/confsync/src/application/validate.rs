//! Validator: checks a user configuration against its reference.

use confsync_core::{
    check_documentation, check_user_config, ReferenceConfig, UserConfig, ValidationReport,
};
use tracing::{debug, info};

use crate::application::AppError;
use crate::infrastructure::storage::{ConfigStore, StorageError};

/// Validates the configuration called `name`.
///
/// Steps, each short-circuiting the rest on failure:
///
/// 1. Every reference key must be documented in `_notes`.
/// 2. A missing user file is created as a copy of the reference.
/// 3. Reference keys must appear in the user file with matching kinds
///    (missing keys only produce a warning).
/// 4. The user file must not contain keys unknown to the reference.
///
/// # Errors
///
/// Returns [`AppError::Config`] for any rule violation or unparsable document
/// and [`AppError::Storage`] when a file cannot be read or written.
pub fn validate_config<S>(store: &S, name: &str) -> Result<ValidationReport, AppError>
where
    S: ConfigStore + ?Sized,
{
    let reference_location = store.reference_location(name);
    let reference = ReferenceConfig::parse(&store.read_reference(name)?, reference_location)?;
    check_documentation(&reference)?;

    let user_location = store.user_location(name);
    let text = match store.read_user(name)? {
        Some(text) => text,
        None => {
            info!(
                "{user_location} does not exist, creating it from {}",
                reference.origin()
            );
            store.write_user(name, &reference.to_compact_json())?;
            store
                .read_user(name)?
                .ok_or_else(|| StorageError::NotFound {
                    location: user_location.clone(),
                })?
        }
    };
    let user = UserConfig::parse(&text, user_location)?;

    let report = check_user_config(&reference, &user)?;
    debug!(
        "{} validated against {} ({} missing entries)",
        user.origin(),
        reference.origin(),
        report.missing.len()
    );
    Ok(report)
}

/// The confirmation line printed after `location` validated successfully.
pub fn valid_notice(location: &str) -> String {
    format!("The entries in {location} are valid.")
}
