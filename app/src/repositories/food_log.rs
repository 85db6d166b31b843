//! Food log repository

use super::{load_json, save_json};
use crate::storage::{KeyValueStore, StorageError, FOOD_LOG_KEY};
use nutrition_planner_shared::FoodLogEntry;

pub struct FoodLogRepository;

impl FoodLogRepository {
    /// Load the full log; a missing key is an empty log
    pub async fn load(store: &dyn KeyValueStore) -> Result<Vec<FoodLogEntry>, StorageError> {
        Ok(load_json(store, FOOD_LOG_KEY).await?.unwrap_or_default())
    }

    pub async fn save(store: &dyn KeyValueStore, entries: &[FoodLogEntry]) -> Result<(), StorageError> {
        save_json(store, FOOD_LOG_KEY, entries).await
    }
}
