//! Data models for the nutrition planner
//!
//! Persisted records use camelCase field names so the stored JSON matches
//! what the browser front-end reads and writes under the same keys.

use crate::health_metrics::{ActivityLevel, BiologicalSex, Goal};
use crate::types::NutritionTotals;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest accepted number of meals per day
pub const MIN_MEALS_PER_DAY: u32 = 1;
/// Highest accepted number of meals per day
pub const MAX_MEALS_PER_DAY: u32 = 8;

/// The single active user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// Age in years
    pub age: u32,
    pub sex: BiologicalSex,
    /// Height in centimeters
    pub height: f64,
    /// Current weight in kilograms
    pub weight: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(default)]
    pub dietary_restrictions: String,
    pub num_meals: u32,
    #[serde(default)]
    pub intolerances: String,
    #[serde(default)]
    pub favorite_foods: String,
    #[serde(default)]
    pub disliked_foods: String,
}

#[cfg(test)]
impl Profile {
    /// Reference profile used throughout the unit tests
    pub(crate) fn sample() -> Self {
        Self {
            name: "Alex".to_string(),
            age: 25,
            sex: BiologicalSex::Male,
            height: 175.0,
            weight: 70.0,
            activity_level: ActivityLevel::Light,
            goal: Goal::Maintain,
            dietary_restrictions: String::new(),
            num_meals: 3,
            intolerances: String::new(),
            favorite_foods: String::new(),
            disliked_foods: String::new(),
        }
    }
}

/// Structured nutrition estimate returned by the AI gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEstimate {
    pub item_name: String,
    pub calories: f64,
    /// Grams of protein
    pub protein: f64,
    /// Grams of carbohydrate
    pub carbohydrates: f64,
    /// Grams of fat
    pub fat: f64,
    /// Portion the estimate covers, e.g. "100g" or "1 cup"
    pub serving_size: String,
}

impl NutritionEstimate {
    pub fn totals(&self) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories,
            protein: self.protein,
            carbohydrates: self.carbohydrates,
            fat: self.fat,
        }
    }
}

/// A committed food log entry
///
/// Entries are immutable once created and the log is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogEntry {
    pub id: Uuid,
    /// When the food was logged (UTC)
    pub date: DateTime<Utc>,
    pub item_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub serving_size: String,
}

impl FoodLogEntry {
    /// Create a new entry from an analyzed estimate
    pub fn from_estimate(estimate: NutritionEstimate, logged_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: logged_at,
            item_name: estimate.item_name,
            calories: estimate.calories,
            protein: estimate.protein,
            carbohydrates: estimate.carbohydrates,
            fat: estimate.fat,
            serving_size: estimate.serving_size,
        }
    }

    /// Calendar day of the entry in UTC
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn totals(&self) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories,
            protein: self.protein,
            carbohydrates: self.carbohydrates,
            fat: self.fat,
        }
    }
}

/// One body-weight observation per calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalWeight {
    /// Serialized as YYYY-MM-DD
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight: f64,
}

// ============================================================================
// Meal Plans
// ============================================================================

/// Recipe suggested for a planned meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// One meal of a generated plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    /// e.g. "Breakfast", "Lunch", "Snack"
    pub meal_type: String,
    pub description: String,
    pub recipes: Vec<Recipe>,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

/// Full-day plan generated by the AI gateway; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub daily_calorie_goal: f64,
    pub meals: Vec<PlannedMeal>,
}

impl MealPlan {
    /// Sum of the per-meal figures
    pub fn totals(&self) -> NutritionTotals {
        self.meals
            .iter()
            .map(|m| NutritionTotals {
                calories: m.calories,
                protein: m.protein,
                carbohydrates: m.carbohydrates,
                fat: m.fat,
            })
            .sum()
    }
}

// ============================================================================
// Custom Plans
// ============================================================================

/// A food analyzed for a specific gram quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedFoodItem {
    #[serde(flatten)]
    pub estimate: NutritionEstimate,
    pub grams: f64,
}

/// A manually assembled meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMeal {
    pub name: String,
    pub items: Vec<AnalyzedFoodItem>,
}

impl CustomMeal {
    pub fn totals(&self) -> NutritionTotals {
        self.items.iter().map(|item| item.estimate.totals()).sum()
    }
}

/// Manually assembled day plan; lives only for the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPlan {
    pub meals: Vec<CustomMeal>,
}

impl Default for CustomPlan {
    fn default() -> Self {
        Self {
            meals: vec![CustomMeal {
                name: "Meal 1".to_string(),
                items: Vec::new(),
            }],
        }
    }
}

impl CustomPlan {
    /// Append an empty meal named after its position
    pub fn add_meal(&mut self) -> usize {
        let index = self.meals.len();
        self.meals.push(CustomMeal {
            name: format!("Meal {}", index + 1),
            items: Vec::new(),
        });
        index
    }

    /// Remove a meal, returning it if the index existed
    pub fn remove_meal(&mut self, index: usize) -> Option<CustomMeal> {
        (index < self.meals.len()).then(|| self.meals.remove(index))
    }

    /// Remove one food from a meal, returning it if both indices existed
    pub fn remove_food(&mut self, meal_index: usize, food_index: usize) -> Option<AnalyzedFoodItem> {
        let meal = self.meals.get_mut(meal_index)?;
        (food_index < meal.items.len()).then(|| meal.items.remove(food_index))
    }

    /// Day totals across every meal
    pub fn totals(&self) -> NutritionTotals {
        self.meals.iter().map(CustomMeal::totals).sum()
    }
}
