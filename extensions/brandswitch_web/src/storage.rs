//! [`KeyValueStore`] over `window.localStorage`

use crate::error::{describe_js, storage_error};
use brandswitch_theme::{KeyValueStore, StoreError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Storage, Window};

/// Origin-scoped browser storage. Access can be denied outright (policy,
/// sandboxed iframes), in which case every call reports
/// [`StoreError::Unavailable`].
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                tracing::warn!(error = %describe_js(&err), "localStorage access denied");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".into()))
    }
}

fn store_error(value: JsValue) -> StoreError {
    let name = value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.name()));
    storage_error(name.as_deref(), describe_js(&value))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(store_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(store_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(store_error)
    }
}
