//! Food log aggregation
//!
//! Entries are matched to a day by their UTC calendar date, then each
//! numeric field is summed independently.

use crate::models::FoodLogEntry;
use crate::types::{DailySummary, NutritionTotals};
use chrono::{Days, NaiveDate};

/// Sum the entries logged on `reference_date`
///
/// Returns all-zero totals when nothing was logged that day. The result does
/// not depend on input order.
pub fn aggregate_for_day(entries: &[FoodLogEntry], reference_date: NaiveDate) -> NutritionTotals {
    entries
        .iter()
        .filter(|entry| entry.day() == reference_date)
        .map(FoodLogEntry::totals)
        .sum()
}

/// Entries logged on `reference_date`, in log order
pub fn entries_for_day(entries: &[FoodLogEntry], reference_date: NaiveDate) -> Vec<&FoodLogEntry> {
    entries
        .iter()
        .filter(|entry| entry.day() == reference_date)
        .collect()
}

/// Longest window callers outside the crate may request from [`daily_totals`]
pub const MAX_SUMMARY_DAYS: u32 = 366;

/// Per-day summaries for the `days` days ending at `end_date`, oldest first
///
/// Days without entries are included with zero totals so the series has a
/// fixed length for charting.
pub fn daily_totals(entries: &[FoodLogEntry], end_date: NaiveDate, days: u32) -> Vec<DailySummary> {
    (0..days)
        .rev()
        .filter_map(|offset| end_date.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| {
            let day_entries = entries_for_day(entries, date);
            DailySummary {
                date,
                entry_count: day_entries.len(),
                totals: day_entries.into_iter().map(FoodLogEntry::totals).sum(),
            }
        })
        .collect()
}

/// Average daily totals across a summary series
pub fn average_totals(summaries: &[DailySummary]) -> NutritionTotals {
    if summaries.is_empty() {
        return NutritionTotals::default();
    }

    let total: NutritionTotals = summaries.iter().map(|s| s.totals).sum();
    let n = summaries.len() as f64;
    NutritionTotals {
        calories: total.calories / n,
        protein: total.protein / n,
        carbohydrates: total.carbohydrates / n,
        fat: total.fat / n,
    }
}
