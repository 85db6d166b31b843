//! Input validation functions
//!
//! Validators return a user-facing message on failure. They run before any
//! gateway call or state mutation so a rejected input leaves the session
//! untouched.

use crate::models::{MealPlan, NutritionEstimate, Profile, MAX_MEALS_PER_DAY, MIN_MEALS_PER_DAY};

fn validate_positive(value: f64, field: &str) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", get_field_display_label(field)));
    }
    if value <= 0.0 {
        return Err(format!("{} must be greater than zero", get_field_display_label(field)));
    }
    Ok(())
}

fn validate_non_negative(value: f64, field: &str) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", get_field_display_label(field)));
    }
    if value < 0.0 {
        return Err(format!("{} cannot be negative", get_field_display_label(field)));
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    validate_positive(weight_kg, "weight")
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    validate_positive(height_cm, "height")
}

/// Validate age in years
pub fn validate_age(age: u32) -> Result<(), String> {
    if age == 0 {
        return Err("Age must be at least 1 year".to_string());
    }
    Ok(())
}

/// Validate the requested number of meals per day
pub fn validate_num_meals(num_meals: u32) -> Result<(), String> {
    if !(MIN_MEALS_PER_DAY..=MAX_MEALS_PER_DAY).contains(&num_meals) {
        return Err(format!(
            "Meals per day must be between {} and {}",
            MIN_MEALS_PER_DAY, MAX_MEALS_PER_DAY
        ));
    }
    Ok(())
}

// ============================================================================
// Profile Validation
// ============================================================================

/// Validate every numeric and required field of a profile
pub fn validate_profile(profile: &Profile) -> Result<(), String> {
    if profile.name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    validate_age(profile.age)?;
    validate_height_cm(profile.height)?;
    validate_weight(profile.weight)?;
    validate_num_meals(profile.num_meals)?;
    Ok(())
}

// ============================================================================
// Food Analysis Validation
// ============================================================================

/// Validate a free-text food description before analysis
pub fn validate_food_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("Please enter a food to analyze".to_string());
    }
    Ok(())
}

/// Validate a gram quantity for the custom planner
pub fn validate_grams(grams: f64) -> Result<(), String> {
    validate_positive(grams, "grams")
}

/// Validate a nutrition estimate returned by the gateway
pub fn validate_estimate(estimate: &NutritionEstimate) -> Result<(), String> {
    if estimate.item_name.trim().is_empty() {
        return Err("Estimate is missing the item name".to_string());
    }
    validate_non_negative(estimate.calories, "calories")?;
    validate_non_negative(estimate.protein, "protein")?;
    validate_non_negative(estimate.carbohydrates, "carbohydrates")?;
    validate_non_negative(estimate.fat, "fat")?;
    Ok(())
}

/// Validate a generated plan against the requested meal count
pub fn validate_meal_plan(plan: &MealPlan, num_meals: u32) -> Result<(), String> {
    if plan.meals.len() != num_meals as usize {
        return Err(format!(
            "Plan has {} meals but {} were requested",
            plan.meals.len(),
            num_meals
        ));
    }
    validate_non_negative(plan.daily_calorie_goal, "daily_calorie_goal")?;
    for meal in &plan.meals {
        validate_non_negative(meal.calories, "calories")?;
        validate_non_negative(meal.protein, "protein")?;
        validate_non_negative(meal.carbohydrates, "carbohydrates")?;
        validate_non_negative(meal.fat, "fat")?;
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" => "Current Weight",
        "height" => "Height",
        "grams" => "Grams",
        "calories" => "Calories",
        "protein" => "Protein",
        "carbohydrates" => "Carbohydrates",
        "fat" => "Fat",
        "daily_calorie_goal" => "Daily Calorie Goal",
        _ => field_name,
    }
}
