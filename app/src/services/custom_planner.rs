//! Manual meal assembly with per-item analysis

use crate::error::{AppError, AppResult};
use crate::gateway::prompts::custom_food_description;
use crate::session::Session;
use nutrition_planner_shared::validation::{validate_food_description, validate_grams};
use nutrition_planner_shared::{AnalyzedFoodItem, CustomPlan, NutritionTotals};
use tracing::{debug, warn};

pub struct CustomPlannerService;

impl CustomPlannerService {
    pub fn plan(session: &Session) -> &CustomPlan {
        &session.custom_plan
    }

    /// Append an empty meal, returning its index
    pub fn add_meal(session: &mut Session) -> usize {
        session.custom_plan.add_meal()
    }

    pub fn remove_meal(session: &mut Session, meal_index: usize) -> AppResult<()> {
        session
            .custom_plan
            .remove_meal(meal_index)
            .map(|_| ())
            .ok_or_else(|| AppError::Validation(format!("Meal {} does not exist", meal_index + 1)))
    }

    /// Analyze `grams` of `food` and add it to a meal
    ///
    /// Quantity and meal index are checked before the gateway is called.
    pub async fn add_food(
        session: &mut Session,
        meal_index: usize,
        food: &str,
        grams: f64,
    ) -> AppResult<AnalyzedFoodItem> {
        validate_food_description(food).map_err(AppError::Validation)?;
        validate_grams(grams).map_err(AppError::Validation)?;
        if meal_index >= session.custom_plan.meals.len() {
            return Err(AppError::Validation(format!("Meal {} does not exist", meal_index + 1)));
        }

        let description = custom_food_description(grams, food);
        let estimate = session
            .state()
            .gateway()
            .analyze_food(&description)
            .await
            .map_err(|e| {
                warn!(error = %e, %description, "Custom food analysis failed");
                e
            })?;

        let item = AnalyzedFoodItem { estimate, grams };
        // Index was checked above and nothing else mutates the plan meanwhile
        if let Some(meal) = session.custom_plan.meals.get_mut(meal_index) {
            meal.items.push(item.clone());
        }
        debug!(meal_index, item = %item.estimate.item_name, "Food added to custom meal");
        Ok(item)
    }

    pub fn remove_food(session: &mut Session, meal_index: usize, food_index: usize) -> AppResult<AnalyzedFoodItem> {
        session
            .custom_plan
            .remove_food(meal_index, food_index)
            .ok_or_else(|| AppError::Validation("Food item does not exist".to_string()))
    }

    /// Day totals across every custom meal
    pub fn totals(session: &Session) -> NutritionTotals {
        session.custom_plan.totals()
    }
}
