//! First-run profile creation

use crate::error::{AppError, AppResult};
use crate::session::Session;
use chrono::NaiveDate;
use nutrition_planner_shared::validation::validate_profile;
use nutrition_planner_shared::{Profile, WeightHistory};
use tracing::info;

pub struct OnboardingService;

impl OnboardingService {
    /// Store the initial profile and seed the weight history with today's weight
    ///
    /// The profile is created once; later edits go through
    /// [`ProfileService::update`](crate::services::ProfileService::update).
    pub async fn complete(session: &mut Session, profile: Profile, today: NaiveDate) -> AppResult<()> {
        if session.is_onboarded() {
            return Err(AppError::AlreadyOnboarded);
        }
        validate_profile(&profile).map_err(AppError::Validation)?;

        session.weight_history = WeightHistory::seeded(today, profile.weight);
        session.profile = Some(profile);

        session.save_profile().await;
        session.save_weight_history().await;

        info!(date = %today, "Onboarding completed");
        Ok(())
    }
}
