//! In-memory configuration storage.
//!
//! Always compiled (not guarded by `#[cfg(test)]`) so integration tests and
//! downstream crates can exercise the use cases without touching disk.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{ConfigStore, StorageError};

#[derive(Debug, Default)]
struct Files {
    references: BTreeMap<String, String>,
    users: BTreeMap<String, String>,
    writes: usize,
}

/// A [`ConfigStore`] backed by in-process maps.
///
/// ```rust
/// use confsync::infrastructure::storage::{ConfigStore, MemoryConfigStore};
///
/// let store = MemoryConfigStore::new().with_reference("generic", "{}");
/// assert_eq!(store.read_reference("generic").unwrap(), "{}");
/// assert!(store.read_user("generic").unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    files: Mutex<Files>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a reference document.
    pub fn with_reference(self, name: &str, contents: &str) -> Self {
        self.lock()
            .references
            .insert(name.to_string(), contents.to_string());
        self
    }

    /// Adds a user document.  Does not count as a write.
    pub fn with_user(self, name: &str, contents: &str) -> Self {
        self.lock()
            .users
            .insert(name.to_string(), contents.to_string());
        self
    }

    /// Current user document for `name`.
    pub fn user_contents(&self, name: &str) -> Option<String> {
        self.lock().users.get(name).cloned()
    }

    /// Number of [`ConfigStore::write_user`] calls so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, Files> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn reference_location(&self, name: &str) -> String {
        format!("{name}.json.sample")
    }

    fn user_location(&self, name: &str) -> String {
        format!("{name}.json")
    }

    fn read_reference(&self, name: &str) -> Result<String, StorageError> {
        self.lock()
            .references
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                location: self.reference_location(name),
            })
    }

    fn read_user(&self, name: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().users.get(name).cloned())
    }

    fn write_user(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        let mut files = self.lock();
        files.users.insert(name.to_string(), contents.to_string());
        files.writes += 1;
        Ok(())
    }
}
