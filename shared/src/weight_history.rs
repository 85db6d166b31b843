//! Weight history tracking
//!
//! Holds at most one observation per calendar day. Recording a weight for a
//! day that already has an entry replaces that entry's value in place;
//! otherwise the observation is appended. The tracker never removes, sorts
//! or reorders entries.

use crate::models::HistoricalWeight;
use crate::types::WeightTrend;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Record a weight, returning the new history
///
/// Recording the same `(date, weight)` twice yields the same history as
/// recording it once.
pub fn record_weight(history: &[HistoricalWeight], date: NaiveDate, weight: f64) -> Vec<HistoricalWeight> {
    let mut next = WeightHistory::from(history.to_vec());
    next.record(date, weight);
    next.into_entries()
}

/// Date-keyed series of body-weight observations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightHistory {
    entries: Vec<HistoricalWeight>,
}

impl WeightHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History containing only the onboarding weight
    pub fn seeded(date: NaiveDate, weight: f64) -> Self {
        Self {
            entries: vec![HistoricalWeight { date, weight }],
        }
    }

    /// Update the entry for `date` in place, or append a new one
    pub fn record(&mut self, date: NaiveDate, weight: f64) {
        match self.entries.iter_mut().find(|entry| entry.date == date) {
            Some(existing) => existing.weight = weight,
            None => self.entries.push(HistoricalWeight { date, weight }),
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.weight)
    }

    pub fn entries(&self) -> &[HistoricalWeight] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HistoricalWeight> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Change between the first and last entries in sequence order
    pub fn trend(&self) -> Option<WeightTrend> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;

        Some(WeightTrend {
            start_weight: first.weight,
            current_weight: last.weight,
            total_change: last.weight - first.weight,
            entries_count: self.entries.len(),
        })
    }
}

impl From<Vec<HistoricalWeight>> for WeightHistory {
    fn from(entries: Vec<HistoricalWeight>) -> Self {
        Self { entries }
    }
}
