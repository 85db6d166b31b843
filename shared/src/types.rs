//! Computed and view types produced by the engine

use crate::models::{FoodLogEntry, HistoricalWeight};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Daily calorie and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTargets {
    pub calorie_goal: f64,
    pub protein_grams_goal: f64,
    pub carb_grams_goal: f64,
    pub fat_grams_goal: f64,
}

/// Summed nutrition figures
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

impl NutritionTotals {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbohydrates: self.carbohydrates + rhs.carbohydrates,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Totals for a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub totals: NutritionTotals,
    pub entry_count: usize,
}

/// Progress of one figure against its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    pub consumed: f64,
    pub target: f64,
    /// consumed / target, or 0 when the target is not positive
    pub ratio: f64,
}

impl MacroProgress {
    pub fn new(consumed: f64, target: f64) -> Self {
        let ratio = if target > 0.0 && target.is_finite() {
            consumed / target
        } else {
            0.0
        };
        Self {
            consumed,
            target,
            ratio: if ratio.is_finite() { ratio } else { 0.0 },
        }
    }
}

/// Weight change between the first and last recorded entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightTrend {
    pub start_weight: f64,
    pub current_weight: f64,
    pub total_change: f64,
    pub entries_count: usize,
}

/// View-ready dashboard summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub greeting_name: String,
    pub date: NaiveDate,
    pub targets: DailyTargets,
    /// Entries logged on `date`, in log order
    pub today_entries: Vec<FoodLogEntry>,
    pub consumed: NutritionTotals,
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbohydrates: MacroProgress,
    pub fat: MacroProgress,
    /// Weight history exactly as stored, for charting
    pub weight_series: Vec<HistoricalWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_trend: Option<WeightTrend>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(50.0, 100.0, 0.5)]
    #[case(150.0, 100.0, 1.5)]
    #[case(10.0, 0.0, 0.0)]
    #[case(10.0, -20.0, 0.0)]
    #[case(0.0, 0.0, 0.0)]
    #[case(10.0, f64::NAN, 0.0)]
    fn test_macro_progress_ratio(#[case] consumed: f64, #[case] target: f64, #[case] expected: f64) {
        let progress = MacroProgress::new(consumed, target);
        assert_eq!(progress.ratio, expected);
        assert!(progress.ratio.is_finite());
    }

    #[test]
    fn test_totals_sum() {
        let parts = [
            NutritionTotals { calories: 100.0, protein: 1.0, carbohydrates: 2.0, fat: 3.0 },
            NutritionTotals { calories: 50.0, protein: 4.0, carbohydrates: 5.0, fat: 6.0 },
        ];
        let total: NutritionTotals = parts.into_iter().sum();
        assert_eq!(
            total,
            NutritionTotals { calories: 150.0, protein: 5.0, carbohydrates: 7.0, fat: 9.0 }
        );
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: NutritionTotals = std::iter::empty().sum();
        assert!(total.is_zero());
    }
}
