//! Food logging: analyze a description, then commit the estimate

use crate::error::{AppError, AppResult};
use crate::session::Session;
use chrono::{DateTime, Utc};
use nutrition_planner_shared::validation::{validate_estimate, validate_food_description};
use nutrition_planner_shared::{FoodLogEntry, NutritionEstimate};
use tracing::{info, warn};

pub struct LoggerService;

impl LoggerService {
    /// Ask the gateway for an estimate; nothing is logged yet
    pub async fn analyze(session: &Session, description: &str) -> AppResult<NutritionEstimate> {
        validate_food_description(description).map_err(AppError::Validation)?;

        let estimate = session
            .state()
            .gateway()
            .analyze_food(description.trim())
            .await
            .map_err(|e| {
                warn!(error = %e, "Food analysis failed");
                e
            })?;

        Ok(estimate)
    }

    /// Append an analyzed estimate to the food log
    pub async fn commit(
        session: &mut Session,
        estimate: NutritionEstimate,
        now: DateTime<Utc>,
    ) -> AppResult<FoodLogEntry> {
        validate_estimate(&estimate).map_err(AppError::Validation)?;

        let entry = FoodLogEntry::from_estimate(estimate, now);
        session.food_log.push(entry.clone());
        session.save_food_log().await;

        info!(id = %entry.id, item = %entry.item_name, calories = entry.calories, "Food logged");
        Ok(entry)
    }

    /// Analyze and commit in one step
    pub async fn log_food(
        session: &mut Session,
        description: &str,
        now: DateTime<Utc>,
    ) -> AppResult<FoodLogEntry> {
        let estimate = Self::analyze(session, description).await?;
        Self::commit(session, estimate, now).await
    }
}
