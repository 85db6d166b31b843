//! Application error handling
//!
//! This module provides unified error handling for the services,
//! converting internal errors to user-facing messages.

use crate::storage::StorageError;
use nutrition_planner_shared::GatewayError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Error type returned by every service operation
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No profile has been set up yet")]
    NotOnboarded,

    #[error("A profile already exists")]
    AlreadyOnboarded,

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Error detail printed by the command-line front-end
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

impl AppError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotOnboarded => "NOT_ONBOARDED",
            AppError::AlreadyOnboarded => "ALREADY_ONBOARDED",
            AppError::Gateway(GatewayError::Analysis(_)) => "ANALYSIS_FAILED",
            AppError::Gateway(GatewayError::PlanGeneration(_)) => "PLAN_GENERATION_FAILED",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Gateway failures leave state untouched, so the user may simply retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Gateway(_))
    }

    /// Message safe to show to the user
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::NotOnboarded => "Please complete onboarding first".to_string(),
            AppError::AlreadyOnboarded => {
                "A profile already exists; update it instead".to_string()
            }
            AppError::Gateway(err) => err.user_message().to_string(),
            AppError::Config(msg) => msg.clone(),
            AppError::Storage(err) => {
                error!("Storage error: {:?}", err);
                "Your data could not be read or saved".to_string()
            }
            AppError::Internal(err) => {
                error!("Internal error: {:?}", err);
                "An internal error occurred".to_string()
            }
        }
    }

    pub fn detail(&self) -> ErrorDetail {
        ErrorDetail {
            code: self.code().to_string(),
            message: self.user_message(),
            retryable: self.is_retryable(),
        }
    }
}

/// Result type alias for service operations
pub type AppResult<T> = Result<T, AppError>;
