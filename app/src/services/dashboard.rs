//! Dashboard read model

use crate::error::{AppError, AppResult};
use crate::session::Session;
use chrono::NaiveDate;
use nutrition_planner_shared::aggregation::average_totals;
use nutrition_planner_shared::{assemble, daily_totals, DailySummary, DashboardView, HistoricalWeight, NutritionTotals};
use serde::Serialize;

/// Days covered by the weekly summary, today included
pub const WEEK_DAYS: u32 = 7;

/// Everything the dashboard screen renders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(flatten)]
    pub view: DashboardView,
    /// Last seven days, oldest first
    pub week: Vec<DailySummary>,
    pub week_average: NutritionTotals,
    /// Synthetic chart series shown while the history has one entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_series: Option<Vec<HistoricalWeight>>,
}

pub struct DashboardService;

impl DashboardService {
    pub fn view(session: &Session, today: NaiveDate) -> AppResult<DashboardSnapshot> {
        let profile = session.profile().ok_or(AppError::NotOnboarded)?;
        let history = session.weight_history().entries();

        let view = assemble(profile, session.food_log(), history, today);
        let week = daily_totals(session.food_log(), today, WEEK_DAYS);
        let week_average = average_totals(&week);

        let demo_series = if session.state().config().display.demo_trend {
            Self::demo_series(history, profile.weight, today)
        } else {
            None
        };

        Ok(DashboardSnapshot {
            view,
            week,
            week_average,
            demo_series,
        })
    }

    #[cfg(feature = "demo-trend")]
    fn demo_series(history: &[HistoricalWeight], weight: f64, today: NaiveDate) -> Option<Vec<HistoricalWeight>> {
        nutrition_planner_shared::demo_trend::demo_trend(history, weight, today)
    }

    #[cfg(not(feature = "demo-trend"))]
    fn demo_series(_history: &[HistoricalWeight], _weight: f64, _today: NaiveDate) -> Option<Vec<HistoricalWeight>> {
        None
    }
}
