//! Google Gemini adapter
//!
//! Calls the `generateContent` REST endpoint with a JSON response schema so
//! the candidate text deserializes straight into the engine's types.

use super::prompts::{analysis_prompt, meal_plan_prompt};
use super::NutritionGateway;
use crate::config::AiConfig;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use nutrition_planner_shared::validation::validate_estimate;
use nutrition_planner_shared::{GatewayError, MealPlan, NutritionEstimate, Profile};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument};

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ============================================================================
// Response Schemas
// ============================================================================

fn food_analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "itemName": { "type": "STRING", "description": "Name of the food or dish" },
            "calories": { "type": "NUMBER", "description": "Estimated total calories" },
            "protein": { "type": "NUMBER", "description": "Grams of protein" },
            "carbohydrates": { "type": "NUMBER", "description": "Grams of carbohydrates" },
            "fat": { "type": "NUMBER", "description": "Grams of fat" },
            "servingSize": { "type": "STRING", "description": "Analyzed portion, e.g. '100g' or '1 cup'" }
        },
        "required": ["itemName", "calories", "protein", "carbohydrates", "fat", "servingSize"]
    })
}

fn meal_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "dailyCalorieGoal": { "type": "NUMBER", "description": "Total daily calorie goal for the plan" },
            "meals": {
                "type": "ARRAY",
                "description": "Meals for the day",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "mealType": { "type": "STRING", "description": "e.g. Breakfast, Lunch, Dinner, Snack" },
                        "description": { "type": "STRING", "description": "Short description of the dish" },
                        "recipes": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "ingredients": { "type": "ARRAY", "items": { "type": "STRING" } },
                                    "instructions": { "type": "ARRAY", "items": { "type": "STRING" } }
                                },
                                "required": ["name", "ingredients", "instructions"]
                            }
                        },
                        "calories": { "type": "NUMBER" },
                        "protein": { "type": "NUMBER" },
                        "carbohydrates": { "type": "NUMBER" },
                        "fat": { "type": "NUMBER" }
                    },
                    "required": ["mealType", "description", "recipes", "calories", "protein", "carbohydrates", "fat"]
                }
            }
        },
        "required": ["dailyCalorieGoal", "meals"]
    })
}

// ============================================================================
// Gateway
// ============================================================================

/// Reported by every call when no API key was configured
pub const MISSING_API_KEY: &str = "Gemini API key is not configured (set GEMINI_API_KEY)";

pub struct GeminiGateway {
    client: Client,
    api_key: Option<SecretString>,
    model: String,
    base_url: String,
}

impl GeminiGateway {
    /// Build the adapter from the `ai` config section
    ///
    /// A missing API key is not an error here; each call then fails with
    /// [`MISSING_API_KEY`] so commands that never reach the model still work.
    pub fn from_config(config: &AiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send one prompt and deserialize the candidate's JSON text
    async fn generate<T: DeserializeOwned>(&self, prompt: String, schema: Value) -> Result<T, String> {
        let api_key = self.api_key.as_ref().ok_or_else(|| MISSING_API_KEY.to_string())?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        debug!(model = %self.model, "Sending request to Gemini API");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        let parsed: Option<GenerateResponse> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            let message = parsed
                .and_then(|r| r.error)
                .map_or_else(|| body.clone(), |e| e.message);
            error!(status = %status, "Gemini API error");
            return Err(format!("Gemini API error ({}): {}", status.as_u16(), message));
        }

        let parsed = parsed.ok_or_else(|| "Malformed Gemini response".to_string())?;
        if let Some(err) = parsed.error {
            return Err(format!("Gemini API error: {}", err.message));
        }

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| "No content in Gemini response".to_string())?;

        serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, "Candidate text does not match the response schema");
            format!("Unexpected response shape: {}", e)
        })
    }
}

#[async_trait]
impl NutritionGateway for GeminiGateway {
    #[instrument(skip(self))]
    async fn analyze_food(&self, description: &str) -> Result<NutritionEstimate, GatewayError> {
        let estimate: NutritionEstimate = self
            .generate(analysis_prompt(description), food_analysis_schema())
            .await
            .map_err(GatewayError::Analysis)?;
        validate_estimate(&estimate).map_err(GatewayError::Analysis)?;
        debug!(item = %estimate.item_name, calories = estimate.calories, "Food analyzed");
        Ok(estimate)
    }

    #[instrument(skip(self, profile), fields(num_meals = profile.num_meals))]
    async fn generate_meal_plan(&self, profile: &Profile) -> Result<MealPlan, GatewayError> {
        let plan: MealPlan = self
            .generate(meal_plan_prompt(profile), meal_plan_schema())
            .await
            .map_err(GatewayError::PlanGeneration)?;
        debug!(meals = plan.meals.len(), "Meal plan generated");
        Ok(plan)
    }
}

impl fmt::Debug for GeminiGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiGateway")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
