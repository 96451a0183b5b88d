//! On-disk configuration storage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ConfigStore, StorageError};
use crate::infrastructure::home::CONFIG_DIR_NAME;

/// Reads and writes `<home>/config/<name>.json` and
/// `<home>/config/<name>.json.sample`.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    config_dir: PathBuf,
}

impl FsConfigStore {
    /// Creates a store rooted at the application base directory `home`.
    pub fn new(home: impl AsRef<Path>) -> Self {
        Self {
            config_dir: home.as_ref().join(CONFIG_DIR_NAME),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the reference document for `name`.
    pub fn reference_path(&self, name: &str) -> PathBuf {
        self.config_dir.join(format!("{name}.json.sample"))
    }

    /// Path of the user document for `name`.
    pub fn user_path(&self, name: &str) -> PathBuf {
        self.config_dir.join(format!("{name}.json"))
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!("read {} bytes from {}", content.len(), path.display());
            Ok(Some(content))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl ConfigStore for FsConfigStore {
    fn reference_location(&self, name: &str) -> String {
        self.reference_path(name).display().to_string()
    }

    fn user_location(&self, name: &str) -> String {
        self.user_path(name).display().to_string()
    }

    fn read_reference(&self, name: &str) -> Result<String, StorageError> {
        let path = self.reference_path(name);
        read_optional(&path)?.ok_or_else(|| StorageError::NotFound {
            location: path.display().to_string(),
        })
    }

    fn read_user(&self, name: &str) -> Result<Option<String>, StorageError> {
        read_optional(&self.user_path(name))
    }

    fn write_user(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.user_path(name);

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| StorageError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&path, contents).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_home_config_layout() {
        let store = FsConfigStore::new("/srv/app");
        assert_eq!(store.config_dir(), Path::new("/srv/app/config"));
        assert_eq!(
            store.reference_path("generic"),
            PathBuf::from("/srv/app/config/generic.json.sample")
        );
        assert_eq!(
            store.user_path("generic"),
            PathBuf::from("/srv/app/config/generic.json")
        );
    }

    #[test]
    fn test_read_user_returns_none_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::new(dir.path());
        assert!(store.read_user("generic").unwrap().is_none());
    }

    #[test]
    fn test_read_reference_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::new(dir.path());

        let err = store.read_reference("generic").unwrap_err();

        assert!(matches!(
            err,
            StorageError::NotFound { ref location } if location.ends_with("generic.json.sample")
        ));
    }

    #[test]
    fn test_write_then_read_user() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::new(dir.path());

        store.write_user("generic", "{\"a\": 1}\n").unwrap();

        assert_eq!(
            store.read_user("generic").unwrap().as_deref(),
            Some("{\"a\": 1}\n")
        );
        assert!(dir.path().join("config").join("generic.json").is_file());
    }

    #[test]
    fn test_read_user_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::new(dir.path());
        std::fs::create_dir_all(store.user_path("generic")).unwrap();

        assert!(matches!(
            store.read_user("generic"),
            Err(StorageError::Io { .. })
        ));
    }
}
