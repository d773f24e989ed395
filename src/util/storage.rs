//! `localStorage`-backed theme preference store.
//!
//! Accessing `localStorage` can throw (private browsing, disabled storage,
//! quota). Those exceptions come back as `StorageError` for the theme
//! manager to drop.

use crate::error::StorageError;
use crate::state::theme::ThemePreferenceStore;
use crate::util::dom::describe_js_error;

pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable("localStorage missing".to_owned())),
            Err(err) => Err(StorageError::Unavailable(describe_js_error(&err))),
        }
    }
}

impl ThemePreferenceStore for LocalStorageStore {
    fn get(&self) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|err| StorageError::Unavailable(describe_js_error(&err)))
    }

    fn set(&self, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(&self.key, value)
            .map_err(|err| StorageError::Rejected(describe_js_error(&err)))
    }

    fn remove(&self) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|err| StorageError::Rejected(describe_js_error(&err)))
    }
}
