//! AI meal plan generation

use crate::error::{AppError, AppResult};
use crate::session::Session;
use nutrition_planner_shared::validation::validate_meal_plan;
use nutrition_planner_shared::{GatewayError, MealPlan};
use tracing::{info, warn};

pub struct PlannerService;

impl PlannerService {
    /// Generate a plan for the current profile
    ///
    /// A plan whose meal count differs from the profile's `num_meals` is
    /// rejected. The previous plan is kept on any failure.
    pub async fn generate(session: &mut Session) -> AppResult<MealPlan> {
        let profile = session.profile().ok_or(AppError::NotOnboarded)?;
        let num_meals = profile.num_meals;

        let plan = session
            .state()
            .gateway()
            .generate_meal_plan(profile)
            .await
            .map_err(|e| {
                warn!(error = %e, "Meal plan generation failed");
                e
            })?;

        if let Err(reason) = validate_meal_plan(&plan, num_meals) {
            warn!(%reason, "Rejected generated meal plan");
            return Err(GatewayError::PlanGeneration(reason).into());
        }

        info!(
            meals = plan.meals.len(),
            goal = plan.daily_calorie_goal,
            planned = plan.totals().calories,
            "Meal plan ready"
        );
        session.meal_plan = Some(plan.clone());
        Ok(plan)
    }
}
