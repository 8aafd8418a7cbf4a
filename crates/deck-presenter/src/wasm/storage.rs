//! `sessionStorage` backend

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::storage::{SessionStore, StoreError};

/// Session store backed by the tab's `sessionStorage`
pub struct WebSessionStore {
    storage: Storage,
}

impl WebSessionStore {
    /// Open the tab's session storage
    ///
    /// Returns `None` when storage is disabled or blocked (private mode,
    /// sandboxed frames).
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.session_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(e) => {
                log::warn!("[deck] sessionStorage blocked: {}", error_name(&e));
                None
            }
        }
    }
}

/// Name of a thrown DOM exception, e.g. `QuotaExceededError`
fn error_name(e: &JsValue) -> String {
    js_sys::Reflect::get(e, &"name".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{:?}", e))
}

fn map_error(e: JsValue) -> StoreError {
    match error_name(&e).as_str() {
        "QuotaExceededError" => StoreError::QuotaExceeded,
        "SecurityError" => StoreError::Unavailable,
        other => StoreError::backend(other),
    }
}

impl SessionStore for WebSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(map_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(map_error)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(map_error)
    }
}
