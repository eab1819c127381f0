//! Small persistent key/value store for cached screen data.
//!
//! Values are JSON strings. `Preferences` adds the typed object/list helpers
//! the screens use.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Last subject the user picked.
pub const SUBJECT_SELECT: &str = "subject_select";
/// Cached subject list.
pub const SUBJECT_LIST: &str = "subject_list";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is not valid json: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("failed to replace store file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub trait KeyValueStore: Send + Sync {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn put_raw(&self, key: &str, value: String) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed access on top of a `KeyValueStore`.
#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn KeyValueStore>,
}

impl Preferences {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Stored object, `None` when missing or stored as null.
    pub fn get_object<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.get_raw(key)? {
            Some(raw) => Ok(serde_json::from_str::<Option<T>>(&raw)?),
            None => Ok(None),
        }
    }

    /// Store `value`; `None` is written as null.
    pub fn put_object<T: Serialize>(&self, key: &str, value: Option<&T>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&value)?;
        self.store.put_raw(key, raw)
    }

    pub fn get_list<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>, StorageError> {
        self.get_object::<Vec<T>>(key)
    }

    pub fn put_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.store.put_raw(key, raw)
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key)
    }
}

#[cfg(test)]
mod tests;
