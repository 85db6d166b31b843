//! AI nutrition gateway
//!
//! The engine never talks to a model directly; it goes through
//! [`NutritionGateway`], which the Gemini adapter implements and tests stub.

pub mod gemini;
pub mod prompts;

pub use gemini::GeminiGateway;

use async_trait::async_trait;
use nutrition_planner_shared::{GatewayError, MealPlan, NutritionEstimate, Profile};

/// Port to the generative-AI service
#[async_trait]
pub trait NutritionGateway: Send + Sync {
    /// Estimate the nutrition of a free-text food description
    async fn analyze_food(&self, description: &str) -> Result<NutritionEstimate, GatewayError>;

    /// Generate a full-day meal plan tailored to the profile
    async fn generate_meal_plan(&self, profile: &Profile) -> Result<MealPlan, GatewayError>;
}
