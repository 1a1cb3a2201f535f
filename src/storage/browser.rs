// Browser localStorage backend
use super::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

pub struct BrowserStore {
    storage: Storage,
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", err))
}

impl BrowserStore {
    /// Open `window.localStorage`. Fails when storage is disabled (private mode, sandboxed iframes).
    pub fn from_window() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}
