//! No Limits Nutrition Shared Library
//!
//! The nutrition goal and aggregation engine: profile model, energy and
//! macro targets, food log aggregation, weight history, and dashboard
//! assembly. Everything here is pure and synchronous; the app and WASM
//! crates supply persistence and the AI gateway.

pub mod aggregation;
pub mod dashboard;
#[cfg(feature = "demo-trend")]
pub mod demo_trend;
pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod types;
pub mod units;
pub mod validation;
pub mod weight_history;

// Re-export commonly used items
pub use aggregation::{aggregate_for_day, daily_totals};
pub use dashboard::assemble;
pub use errors::*;
pub use health_metrics::{compute_targets, ActivityLevel, BiologicalSex, Goal};
pub use models::*;
pub use types::*;
pub use units::Macronutrient;
pub use weight_history::{record_weight, WeightHistory};
