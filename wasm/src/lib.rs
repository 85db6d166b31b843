//! No Limits Nutrition WASM Module
//!
//! Browser bindings for the nutrition engine. Structured values cross the
//! boundary as JSON strings in the same camelCase shape the app persists.

use chrono::NaiveDate;
use nutrition_planner_shared::aggregation::MAX_SUMMARY_DAYS;
use nutrition_planner_shared::health_metrics::{calculate_bmr_mifflin, EnergyBreakdown};
use nutrition_planner_shared::{
    ActivityLevel, BiologicalSex, FoodLogEntry, HistoricalWeight, MacroProgress, Profile,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// JSON helpers
// ============================================================================

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {}: {}", what, e))
}

fn parse_date(date: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date {:?}, expected YYYY-MM-DD", date))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn js(result: Result<String, String>) -> Result<String, JsError> {
    result.map_err(|e| JsError::new(&e))
}

// ============================================================================
// Engine operations
// ============================================================================

fn compute_targets_json(profile_json: &str) -> Result<String, String> {
    let profile: Profile = parse(profile_json, "profile")?;
    to_json(&nutrition_planner_shared::compute_targets(&profile))
}

fn energy_breakdown_json(profile_json: &str) -> Result<String, String> {
    let profile: Profile = parse(profile_json, "profile")?;
    let breakdown: EnergyBreakdown =
        nutrition_planner_shared::health_metrics::compute_energy_breakdown(&profile);
    to_json(&breakdown)
}

fn aggregate_for_day_json(entries_json: &str, date: &str) -> Result<String, String> {
    let entries: Vec<FoodLogEntry> = parse(entries_json, "food log")?;
    to_json(&nutrition_planner_shared::aggregate_for_day(&entries, parse_date(date)?))
}

fn daily_totals_json(entries_json: &str, end_date: &str, days: u32) -> Result<String, String> {
    if days > MAX_SUMMARY_DAYS {
        return Err(format!("At most {} days can be summarized", MAX_SUMMARY_DAYS));
    }
    let entries: Vec<FoodLogEntry> = parse(entries_json, "food log")?;
    to_json(&nutrition_planner_shared::daily_totals(&entries, parse_date(end_date)?, days))
}

fn record_weight_json(history_json: &str, date: &str, weight: f64) -> Result<String, String> {
    nutrition_planner_shared::validation::validate_weight(weight)?;
    let history: Vec<HistoricalWeight> = parse(history_json, "weight history")?;
    to_json(&nutrition_planner_shared::record_weight(&history, parse_date(date)?, weight))
}

fn assemble_dashboard_json(
    profile_json: &str,
    entries_json: &str,
    history_json: &str,
    date: &str,
) -> Result<String, String> {
    let profile: Profile = parse(profile_json, "profile")?;
    let entries: Vec<FoodLogEntry> = parse(entries_json, "food log")?;
    let history: Vec<HistoricalWeight> = parse(history_json, "weight history")?;
    to_json(&nutrition_planner_shared::assemble(&profile, &entries, &history, parse_date(date)?))
}

fn activity_levels_json() -> Result<String, String> {
    let levels: Vec<serde_json::Value> = ActivityLevel::ALL
        .iter()
        .map(|level| {
            serde_json::json!({
                "value": level,
                "label": level.label(),
                "multiplier": level.multiplier(),
            })
        })
        .collect();
    to_json(&levels)
}

fn sex(is_male: bool) -> BiologicalSex {
    if is_male {
        BiologicalSex::Male
    } else {
        BiologicalSex::Female
    }
}

// ============================================================================
// Bindings
// ============================================================================

/// Daily calorie and macro targets for a profile
#[wasm_bindgen]
pub fn compute_targets(profile_json: &str) -> Result<String, JsError> {
    js(compute_targets_json(profile_json))
}

/// BMR, multiplier, TDEE and goal adjustment behind the targets
#[wasm_bindgen]
pub fn energy_breakdown(profile_json: &str) -> Result<String, JsError> {
    js(energy_breakdown_json(profile_json))
}

/// Sum of the entries logged on `date` (YYYY-MM-DD, UTC)
#[wasm_bindgen]
pub fn aggregate_for_day(entries_json: &str, date: &str) -> Result<String, JsError> {
    js(aggregate_for_day_json(entries_json, date))
}

/// Per-day totals for the `days` days ending at `end_date`, oldest first
///
/// `days` is capped at one leap year.
#[wasm_bindgen]
pub fn daily_totals(entries_json: &str, end_date: &str, days: u32) -> Result<String, JsError> {
    js(daily_totals_json(entries_json, end_date, days))
}

/// Upsert a weight for `date`, returning the new history
#[wasm_bindgen]
pub fn record_weight(history_json: &str, date: &str, weight: f64) -> Result<String, JsError> {
    js(record_weight_json(history_json, date, weight))
}

#[wasm_bindgen]
pub fn assemble_dashboard(
    profile_json: &str,
    entries_json: &str,
    history_json: &str,
    date: &str,
) -> Result<String, JsError> {
    js(assemble_dashboard_json(profile_json, entries_json, history_json, date))
}

/// Activity levels with labels and multipliers, for form selects
#[wasm_bindgen]
pub fn activity_levels() -> Result<String, JsError> {
    js(activity_levels_json())
}

/// Basal metabolic rate (Mifflin-St Jeor)
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, is_male: bool) -> f64 {
    calculate_bmr_mifflin(weight_kg, height_cm, age_years, sex(is_male))
}

/// Calculate TDEE (Total Daily Energy Expenditure)
/// Uses Mifflin-St Jeor equation
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_multiplier: f64,
) -> f64 {
    calculate_bmr(weight_kg, height_cm, age_years, is_male) * activity_multiplier
}

/// Progress ratio, 0 when the target is not positive
#[wasm_bindgen]
pub fn macro_ratio(consumed: f64, target: f64) -> f64 {
    MacroProgress::new(consumed, target).ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const PROFILE: &str = r#"{
        "name": "Alex", "age": 25, "sex": "male", "height": 175, "weight": 70,
        "activityLevel": "light", "goal": "maintain", "numMeals": 3
    }"#;

    const ENTRIES: &str = r#"[
        {"id": "7d9f1c1e-8f0a-4a3c-9a59-2a9a8f7c1b01", "date": "2024-05-01T08:00:00Z",
         "itemName": "Oats", "calories": 300, "protein": 10, "carbohydrates": 50, "fat": 6,
         "servingSize": "80g"},
        {"id": "7d9f1c1e-8f0a-4a3c-9a59-2a9a8f7c1b02", "date": "2024-04-30T20:00:00Z",
         "itemName": "Pizza", "calories": 800, "protein": 30, "carbohydrates": 90, "fat": 35,
         "servingSize": "1 pizza"}
    ]"#;

    fn value(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_tdee_matches_reference() {
        assert!((calculate_bmr(70.0, 175.0, 25, true) - 1673.75).abs() < 1e-9);
        assert!((calculate_tdee(70.0, 175.0, 25, true, 1.375) - 2301.40625).abs() < 1e-9);
    }

    #[test]
    fn test_compute_targets() {
        let targets = value(&compute_targets_json(PROFILE).unwrap());
        let goal = targets["calorieGoal"].as_f64().unwrap();
        assert!((goal - 2301.40625).abs() < 1e-6);
    }

    #[test]
    fn test_bad_profile_json_is_an_error() {
        assert!(compute_targets_json("{}").unwrap_err().starts_with("Invalid profile"));
    }

    #[test]
    fn test_aggregate_for_day() {
        let totals = value(&aggregate_for_day_json(ENTRIES, "2024-05-01").unwrap());
        assert_eq!(totals["calories"], 300.0);
        assert!(aggregate_for_day_json(ENTRIES, "05/01/2024").is_err());
    }

    #[test]
    fn test_daily_totals_window() {
        let days = value(&daily_totals_json(ENTRIES, "2024-05-01", 2).unwrap());
        assert_eq!(days.as_array().unwrap().len(), 2);
        assert_eq!(days[0]["totals"]["calories"], 800.0);
    }

    #[test]
    fn test_daily_totals_rejects_oversized_window() {
        assert!(daily_totals_json(ENTRIES, "2024-05-01", MAX_SUMMARY_DAYS).is_ok());
        let err = daily_totals_json(ENTRIES, "2024-05-01", u32::MAX).unwrap_err();
        assert!(err.contains("366"), "{}", err);
    }

    #[test]
    fn test_record_weight_upserts() {
        let history = record_weight_json("[]", "2024-05-01", 70.0).unwrap();
        let history = record_weight_json(&history, "2024-05-01", 69.5).unwrap();
        assert_eq!(value(&history), value(r#"[{"date": "2024-05-01", "weight": 69.5}]"#));
        assert!(record_weight_json("[]", "2024-05-01", -1.0).is_err());
    }

    #[test]
    fn test_assemble_dashboard() {
        let view = value(
            &assemble_dashboard_json(PROFILE, ENTRIES, r#"[{"date": "2024-05-01", "weight": 70}]"#, "2024-05-01")
                .unwrap(),
        );
        assert_eq!(view["greetingName"], "Alex");
        assert_eq!(view["consumed"]["calories"], 300.0);
        assert_eq!(view["todayEntries"].as_array().unwrap().len(), 1);
        assert_eq!(view["todayEntries"][0]["itemName"], "Oats");
    }

    #[test]
    fn test_activity_levels_cover_all() {
        let levels = value(&activity_levels_json().unwrap());
        assert_eq!(levels.as_array().unwrap().len(), 5);
        assert_eq!(levels[0]["value"], "sedentary");
    }

    #[test]
    fn test_macro_ratio() {
        assert_eq!(macro_ratio(50.0, 100.0), 0.5);
        assert_eq!(macro_ratio(50.0, 0.0), 0.0);
    }
}
