//! Typed repositories over the key-value store
//!
//! Each repository owns one storage key and the JSON shape stored under it.

pub mod food_log;
pub mod profile;
pub mod weight;

pub use food_log::FoodLogRepository;
pub use profile::ProfileRepository;
pub use weight::WeightHistoryRepository;

use crate::storage::{KeyValueStore, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;

async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

async fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    store.set(key, serde_json::to_value(value)?).await
}
