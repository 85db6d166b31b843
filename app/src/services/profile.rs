//! Profile edits

use crate::error::{AppError, AppResult};
use crate::session::Session;
use chrono::NaiveDate;
use nutrition_planner_shared::validation::validate_profile;
use nutrition_planner_shared::Profile;
use tracing::{debug, info};

pub struct ProfileService;

impl ProfileService {
    /// Replace the profile; a changed weight is recorded for `today`
    pub async fn update(session: &mut Session, profile: Profile, today: NaiveDate) -> AppResult<()> {
        let previous_weight = session.profile().ok_or(AppError::NotOnboarded)?.weight;
        validate_profile(&profile).map_err(AppError::Validation)?;

        let weight_changed = profile.weight != previous_weight;
        if weight_changed {
            debug!(from = previous_weight, to = profile.weight, "Weight changed");
            session.weight_history.record(today, profile.weight);
        }
        session.profile = Some(profile);

        session.save_profile().await;
        if weight_changed {
            session.save_weight_history().await;
        }

        info!(weight_changed, "Profile updated");
        Ok(())
    }

    /// Record a new weight without other profile changes
    pub async fn record_weight(session: &mut Session, weight: f64, today: NaiveDate) -> AppResult<()> {
        let profile = session.profile().ok_or(AppError::NotOnboarded)?;
        let updated = Profile { weight, ..profile.clone() };
        Self::update(session, updated, today).await
    }
}
