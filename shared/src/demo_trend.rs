//! Illustrative weight trend for first-run charts
//!
//! A freshly onboarded user has a single weight entry, which charts as a
//! lone dot. The presentation layer may swap in a short synthetic series
//! instead. The result is display-only: it is never recorded into a
//! [`WeightHistory`](crate::weight_history::WeightHistory) or persisted.

use crate::models::HistoricalWeight;
use chrono::{Days, NaiveDate};

/// Offsets above the current weight, oldest first
const DEMO_OFFSETS_KG: [f64; 5] = [2.0, 1.5, 1.0, 0.5, 0.0];

/// Spacing between synthetic points
const DEMO_SPACING_DAYS: u64 = 7;

/// Build a demo series ending at the seed entry
///
/// Returns `None` when the history already holds more than one real entry,
/// or when it is empty and no fallback weight is known.
pub fn demo_trend(
    history: &[HistoricalWeight],
    current_weight: f64,
    today: NaiveDate,
) -> Option<Vec<HistoricalWeight>> {
    let anchor = match history {
        [] => HistoricalWeight { date: today, weight: current_weight },
        [seed] => seed.clone(),
        _ => return None,
    };

    if !anchor.weight.is_finite() || anchor.weight <= 0.0 {
        return None;
    }

    let last = DEMO_OFFSETS_KG.len() as u64 - 1;
    DEMO_OFFSETS_KG
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            let weeks_back = last - i as u64;
            anchor
                .date
                .checked_sub_days(Days::new(weeks_back * DEMO_SPACING_DAYS))
                .map(|date| HistoricalWeight { date, weight: anchor.weight + offset })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_trend_ends_at_seed() {
        let seed = vec![HistoricalWeight { date: day(2, 29), weight: 80.0 }];
        let series = demo_trend(&seed, 99.0, day(3, 5)).unwrap();

        assert_eq!(series.len(), 5);
        assert_eq!(series[0], HistoricalWeight { date: day(2, 1), weight: 82.0 });
        assert_eq!(series[4], seed[0]);
        let weights: Vec<f64> = series.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![82.0, 81.5, 81.0, 80.5, 80.0]);
    }

    #[test]
    fn test_empty_history_uses_current_weight() {
        let series = demo_trend(&[], 70.0, day(6, 30)).unwrap();
        assert_eq!(series.last().unwrap(), &HistoricalWeight { date: day(6, 30), weight: 70.0 });
    }

    #[test]
    fn test_real_history_is_left_alone() {
        let history = vec![
            HistoricalWeight { date: day(1, 1), weight: 70.0 },
            HistoricalWeight { date: day(1, 8), weight: 69.5 },
        ];
        assert!(demo_trend(&history, 69.5, day(1, 9)).is_none());
    }
}
