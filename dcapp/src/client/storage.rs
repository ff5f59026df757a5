use dccore::{
    error::PersistError,
    persist::{
        KeyValueStore,
        Persistence,
    },
};

/// `window.localStorage`.
pub struct BrowserStorage(web_sys::Storage);

fn storage_error(e: wasm_bindgen::JsValue) -> PersistError {
    PersistError::Storage(format!("{e:?}"))
}

impl BrowserStorage {
    pub fn local() -> Result<Self, PersistError> {
        leptos::prelude::window()
            .local_storage()
            .map_err(storage_error)?
            .map(Self)
            .ok_or_else(|| PersistError::Storage("localStorage is unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        self.0.get_item(key).map_err(storage_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.0.set_item(key, value).map_err(storage_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistError> {
        self.0.remove_item(key).map_err(storage_error)
    }
}

/// The last-search helper over the browser's local storage.
pub fn persistence() -> Result<Persistence<BrowserStorage>, PersistError> {
    Ok(Persistence::new(BrowserStorage::local()?))
}
