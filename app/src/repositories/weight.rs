//! Weight history repository

use super::{load_json, save_json};
use crate::storage::{KeyValueStore, StorageError, WEIGHT_HISTORY_KEY};
use nutrition_planner_shared::WeightHistory;

pub struct WeightHistoryRepository;

impl WeightHistoryRepository {
    /// Load the history; a missing key is an empty history
    pub async fn load(store: &dyn KeyValueStore) -> Result<WeightHistory, StorageError> {
        Ok(load_json(store, WEIGHT_HISTORY_KEY).await?.unwrap_or_default())
    }

    pub async fn save(store: &dyn KeyValueStore, history: &WeightHistory) -> Result<(), StorageError> {
        save_json(store, WEIGHT_HISTORY_KEY, history).await
    }
}
