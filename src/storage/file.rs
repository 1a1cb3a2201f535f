use super::{KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

const PREFERENCES_FILE: &str = "preferences.json";

/// On-disk shape: one JSON object, string keys to string values.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct Preferences {
    entries: BTreeMap<String, String>,
}

/// Flat JSON object of string values on disk.
///
/// Every call reads the file again so several windows of the app never
/// overwrite each other's entries with a stale copy.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user's configuration directory, e.g. `~/.config/<app_dir>/preferences.json`.
    pub fn in_config_dir(app_dir: &str) -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(app_dir).join(PREFERENCES_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Preferences, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Preferences::default()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut preferences = self.load()?;
        preferences
            .entries
            .insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&preferences)?)?;
        tracing::debug!("Saved preference {} to {}", key, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join(PREFERENCES_FILE));
        assert_eq!(store.get("cookieConsent"), Ok(None));
    }

    #[test]
    fn test_set_creates_parent_dirs_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revitcad-site").join(PREFERENCES_FILE);

        FileStore::new(&path).set("cookieConsent", "true").unwrap();

        // A fresh handle sees the value, as after an application restart.
        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("cookieConsent"), Ok(Some("true".to_string())));
    }

    #[test]
    fn test_set_keeps_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join(PREFERENCES_FILE));
        store.set("theme", "dark").unwrap();
        store.set("cookieConsent", "false").unwrap();

        assert_eq!(store.get("theme"), Ok(Some("dark".to_string())));
        assert_eq!(store.get("cookieConsent"), Ok(Some("false".to_string())));
    }

    #[test]
    fn test_corrupt_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "{not json").unwrap();

        let err = FileStore::new(&path).get("cookieConsent").unwrap_err();
        assert!(matches!(err, StorageError::Format(_)));
    }

    #[test]
    fn test_file_is_a_flat_string_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        FileStore::new(&path).set("cookieConsent", "true").unwrap();

        let on_disk: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({ "cookieConsent": "true" }));
    }

    #[test]
    fn test_non_string_value_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, r#"{"cookieConsent": true}"#).unwrap();

        let err = FileStore::new(&path).get("cookieConsent").unwrap_err();
        assert!(matches!(err, StorageError::Format(_)));
    }
}
