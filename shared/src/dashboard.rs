//! Dashboard assembly
//!
//! Read-side composition of the calculator, the aggregator and the weight
//! history into a single view. Inputs are only borrowed.

use crate::aggregation::{aggregate_for_day, entries_for_day};
use crate::health_metrics::compute_targets;
use crate::models::{FoodLogEntry, HistoricalWeight, Profile};
use crate::types::{DashboardView, MacroProgress};
use crate::weight_history::WeightHistory;
use chrono::NaiveDate;

/// Assemble today's dashboard view
pub fn assemble(
    profile: &Profile,
    entries: &[FoodLogEntry],
    history: &[HistoricalWeight],
    today: NaiveDate,
) -> DashboardView {
    let targets = compute_targets(profile);
    let today_entries: Vec<FoodLogEntry> =
        entries_for_day(entries, today).into_iter().cloned().collect();
    let consumed = aggregate_for_day(&today_entries, today);
    let weight_series = history.to_vec();
    let weight_trend = WeightHistory::from(weight_series.clone()).trend();

    DashboardView {
        greeting_name: profile.name.clone(),
        date: today,
        targets,
        today_entries,
        consumed,
        calories: MacroProgress::new(consumed.calories, targets.calorie_goal),
        protein: MacroProgress::new(consumed.protein, targets.protein_grams_goal),
        carbohydrates: MacroProgress::new(consumed.carbohydrates, targets.carb_grams_goal),
        fat: MacroProgress::new(consumed.fat, targets.fat_grams_goal),
        weight_series,
        weight_trend,
    }
}
