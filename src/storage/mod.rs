// Persisted key/value storage behind a small trait so components never talk to
// the platform directly
mod error;
#[cfg(not(feature = "web"))]
mod file;
mod memory;
#[cfg(feature = "web")]
mod browser;

use std::rc::Rc;

pub use error::StorageError;
#[cfg(not(feature = "web"))]
pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(feature = "web")]
pub use browser::BrowserStore;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub type SharedStore = Rc<dyn KeyValueStore>;

// Web: localStorage, falling back to memory when the browser refuses access
#[cfg(feature = "web")]
pub fn platform_store(_preferences_dir: &str) -> SharedStore {
    match BrowserStore::from_window() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            tracing::warn!("localStorage unavailable, preferences will not persist: {}", e);
            Rc::new(MemoryStore::new())
        }
    }
}

// Desktop/mobile: JSON file in the user's config directory
#[cfg(not(feature = "web"))]
pub fn platform_store(preferences_dir: &str) -> SharedStore {
    match FileStore::in_config_dir(preferences_dir) {
        Some(store) => {
            tracing::info!("Using preferences file {}", store.path().display());
            Rc::new(store)
        }
        None => {
            tracing::warn!("No config directory found, preferences will not persist");
            Rc::new(MemoryStore::new())
        }
    }
}
