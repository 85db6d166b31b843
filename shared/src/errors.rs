//! Error types for the nutrition engine and its collaborators

use thiserror::Error;

/// Failure reported by the AI nutrition gateway
///
/// The engine only distinguishes which request failed; transport errors,
/// non-success responses and schema mismatches all collapse into the
/// message carried by the variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Food analysis failed: {0}")]
    Analysis(String),

    #[error("Meal plan generation failed: {0}")]
    PlanGeneration(String),
}

impl GatewayError {
    /// Message shown to the user; every gateway failure can be retried
    pub fn user_message(&self) -> &'static str {
        match self {
            GatewayError::Analysis(_) => "Could not analyze the food. Please try again.",
            GatewayError::PlanGeneration(_) => {
                "Could not generate the nutrition plan. Please try again."
            }
        }
    }
}
