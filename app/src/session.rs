//! The single-user session
//!
//! Holds everything the screens read and write: the profile, the food log,
//! the weight history and the two plans. Only the first three are
//! persisted. Persistence is best-effort: a failed save is logged and the
//! in-memory state stays authoritative.

use crate::repositories::{FoodLogRepository, ProfileRepository, WeightHistoryRepository};
use crate::state::AppState;
use nutrition_planner_shared::{CustomPlan, FoodLogEntry, MealPlan, Profile, WeightHistory};
use tracing::{info, warn};

pub struct Session {
    pub(crate) state: AppState,
    pub(crate) profile: Option<Profile>,
    pub(crate) food_log: Vec<FoodLogEntry>,
    pub(crate) weight_history: WeightHistory,
    pub(crate) meal_plan: Option<MealPlan>,
    pub(crate) custom_plan: CustomPlan,
}

impl Session {
    /// Start an empty session without touching storage
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            profile: None,
            food_log: Vec::new(),
            weight_history: WeightHistory::new(),
            meal_plan: None,
            custom_plan: CustomPlan::default(),
        }
    }

    /// Restore persisted data; unreadable keys fall back to empty defaults
    pub async fn restore(state: AppState) -> Self {
        let mut session = Self::new(state);
        let store = session.state.store();

        let profile = ProfileRepository::load(store).await.unwrap_or_else(|e| {
            warn!(error = %e, "Could not load profile");
            None
        });
        let food_log = FoodLogRepository::load(store).await.unwrap_or_else(|e| {
            warn!(error = %e, "Could not load food log");
            Vec::new()
        });
        let weight_history = WeightHistoryRepository::load(store).await.unwrap_or_else(|e| {
            warn!(error = %e, "Could not load weight history");
            WeightHistory::new()
        });

        info!(
            onboarded = profile.is_some(),
            entries = food_log.len(),
            weights = weight_history.len(),
            "Session restored"
        );

        session.profile = profile;
        session.food_log = food_log;
        session.weight_history = weight_history;
        session
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn is_onboarded(&self) -> bool {
        self.profile.is_some()
    }

    pub fn food_log(&self) -> &[FoodLogEntry] {
        &self.food_log
    }

    pub fn weight_history(&self) -> &WeightHistory {
        &self.weight_history
    }

    pub fn meal_plan(&self) -> Option<&MealPlan> {
        self.meal_plan.as_ref()
    }

    pub fn custom_plan(&self) -> &CustomPlan {
        &self.custom_plan
    }

    pub(crate) async fn save_profile(&self) {
        let Some(profile) = &self.profile else { return };
        if let Err(e) = ProfileRepository::save(self.state.store(), profile).await {
            warn!(error = %e, "Failed to persist profile");
        }
    }

    pub(crate) async fn save_food_log(&self) {
        if let Err(e) = FoodLogRepository::save(self.state.store(), &self.food_log).await {
            warn!(error = %e, "Failed to persist food log");
        }
    }

    pub(crate) async fn save_weight_history(&self) {
        if let Err(e) = WeightHistoryRepository::save(self.state.store(), &self.weight_history).await {
            warn!(error = %e, "Failed to persist weight history");
        }
    }
}
