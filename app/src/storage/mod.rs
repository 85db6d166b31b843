//! Key-value persistence
//!
//! The planner keeps three JSON documents under fixed keys. Values are
//! stored as opaque JSON; typed access lives in the repositories.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Key of the persisted profile
pub const PROFILE_KEY: &str = "profile";
/// Key of the persisted food log
pub const FOOD_LOG_KEY: &str = "foodLog";
/// Key of the persisted weight history
pub const WEIGHT_HISTORY_KEY: &str = "weightHistory";

/// Failure reading or writing the store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Local key-value store holding JSON documents
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value under `key`; `None` when nothing was stored yet
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Replace the value under `key`
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// Keys become file names, so only plain identifiers are accepted
pub(crate) fn check_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
