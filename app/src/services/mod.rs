//! Business logic services
//!
//! One service per user-facing action. Each validates its input before any
//! gateway call or state mutation, so a rejected action leaves the session
//! unchanged.

pub mod custom_planner;
pub mod dashboard;
pub mod logger;
pub mod onboarding;
pub mod planner;
pub mod profile;

pub use custom_planner::CustomPlannerService;
pub use dashboard::{DashboardService, DashboardSnapshot};
pub use logger::LoggerService;
pub use onboarding::OnboardingService;
pub use planner::PlannerService;
pub use profile::ProfileService;
