//! Browser `localStorage` backend for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate builds talk to `window.localStorage`. Server builds have no
//! browser storage: reads find nothing and writes fail with
//! [`StoreError::Unavailable`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use gate::{SessionStore, StorageBackend, StoreError};

/// Session store used by the running app.
pub type BrowserSessionStore = SessionStore<LocalStorageBackend>;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    window.local_storage().map_err(js_error)?.ok_or(StoreError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}
