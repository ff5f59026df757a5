//! Mirroring of the search form to a key-value store, so a revisit
//! pre-fills the last query.

use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    collections::HashMap,
};

use crate::{
    case::SearchForm,
    error::PersistError,
};

/// The single key the last search is stored under.
pub const LAST_SEARCH_KEY: &str = "devcourt.lastSearch";

/// A plain snapshot of the search form fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastSearch {
    #[serde(default)]
    pub case_type: String,
    #[serde(default)]
    pub case_number: String,
    #[serde(default, deserialize_with = "crate::case::year_text")]
    pub filing_year: String,
}

/// The storage primitives needed, modelled after `window.localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError>;
    fn remove_item(&self, key: &str) -> Result<(), PersistError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistError> {
        (**self).remove_item(key)
    }
}

/// An in-process store; state lives only as long as the value.
#[derive(Debug, Default)]
pub struct MemoryStore(RefCell<HashMap<String, String>>);

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.0.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistError> {
        self.0.borrow_mut().remove(key);
        Ok(())
    }
}

pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save(&self, snapshot: &LastSearch) -> Result<(), PersistError> {
        let value = serde_json::to_string(snapshot)?;
        self.store.set_item(LAST_SEARCH_KEY, &value)
    }

    /// The stored snapshot, if there is one; a stored value that fails to
    /// parse is reported as an error and left in place.
    pub fn load(&self) -> Result<Option<LastSearch>, PersistError> {
        self.store.get_item(LAST_SEARCH_KEY)?
            .map(|value| serde_json::from_str(&value))
            .transpose()
            .map_err(PersistError::from)
    }

    pub fn clear(&self) -> Result<(), PersistError> {
        self.store.remove_item(LAST_SEARCH_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl From<&SearchForm> for LastSearch {
    fn from(form: &SearchForm) -> Self {
        Self {
            case_type: form.case_type.clone(),
            case_number: form.case_number.clone(),
            filing_year: form.filing_year.clone(),
        }
    }
}

impl From<LastSearch> for SearchForm {
    fn from(snapshot: LastSearch) -> Self {
        Self {
            case_type: snapshot.case_type,
            case_number: snapshot.case_number,
            filing_year: snapshot.filing_year,
        }
    }
}
