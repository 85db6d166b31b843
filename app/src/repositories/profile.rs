//! Profile repository

use super::{load_json, save_json};
use crate::storage::{KeyValueStore, StorageError, PROFILE_KEY};
use nutrition_planner_shared::Profile;

pub struct ProfileRepository;

impl ProfileRepository {
    /// Load the stored profile, if onboarding has completed
    pub async fn load(store: &dyn KeyValueStore) -> Result<Option<Profile>, StorageError> {
        load_json(store, PROFILE_KEY).await
    }

    pub async fn save(store: &dyn KeyValueStore, profile: &Profile) -> Result<(), StorageError> {
        save_json(store, PROFILE_KEY, profile).await
    }
}
