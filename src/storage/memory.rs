use super::{KeyValueStore, StorageError};
use std::{cell::RefCell, collections::HashMap};

/// Volatile store, used when the platform offers nothing persistent.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("cookieConsent"), Ok(None));
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("cookieConsent", "true").unwrap();
        store.set("cookieConsent", "false").unwrap();
        assert_eq!(store.get("cookieConsent"), Ok(Some("false".to_string())));
    }
}
