//! Energy and macro target calculations
//!
//! Derives the daily calorie goal and macro gram targets from a user
//! profile. Basal metabolic rate uses the Mifflin-St Jeor equation, scaled
//! by a fixed activity multiplier and shifted by the goal adjustment.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Tagged Enums**: Logic matches on enum tags, labels are display only
//! 3. **Total**: Every function is defined for every validated profile

use crate::models::Profile;
use crate::types::DailyTargets;
use crate::units::Macronutrient;
use serde::{Deserialize, Serialize};

/// Calorie shift applied for the lose and gain goals
pub const GOAL_CALORIE_ADJUSTMENT: f64 = 500.0;

/// Share of the calorie goal assigned to protein
pub const PROTEIN_CALORIE_SHARE: f64 = 0.30;
/// Share of the calorie goal assigned to carbohydrate
pub const CARB_CALORIE_SHARE: f64 = 0.40;
/// Share of the calorie goal assigned to fat
pub const FAT_CALORIE_SHARE: f64 = 0.30;

// ============================================================================
// Profile Enums
// ============================================================================

/// Biological sex for the BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "Male",
            BiologicalSex::Female => "Female",
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Physical job plus daily training
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::ExtraActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Light exercise (1-3 days/week)",
            ActivityLevel::Moderate => "Moderate exercise (3-5 days/week)",
            ActivityLevel::Active => "Very active (6-7 days/week)",
            ActivityLevel::ExtraActive => "Extra active (physical job and daily training)",
        }
    }
}

/// Body weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Calories added to TDEE for this goal
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::Lose => -GOAL_CALORIE_ADJUSTMENT,
            Goal::Maintain => 0.0,
            Goal::Gain => GOAL_CALORIE_ADJUSTMENT,
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Lose => "Lose weight",
            Goal::Maintain => "Maintain weight",
            Goal::Gain => "Gain muscle",
        }
    }
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(profile: &Profile) -> f64 {
    let bmr = calculate_bmr_mifflin(profile.weight, profile.height, profile.age, profile.sex);
    bmr * profile.activity_level.multiplier()
}

/// Energy calculation result with breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBreakdown {
    /// Basal Metabolic Rate
    pub bmr: f64,
    /// Activity multiplier used
    pub activity_multiplier: f64,
    /// Total Daily Energy Expenditure
    pub tdee: f64,
    /// Calories added by the goal (negative for loss)
    pub goal_adjustment: f64,
    /// Resulting daily targets
    pub targets: DailyTargets,
}

/// Derive calorie and macro targets from a calorie goal
///
/// Protein and carbohydrate use 4 kcal/g, fat 9 kcal/g. The three shares
/// are independent display targets, not a constraint system.
pub fn targets_from_calories(calorie_goal: f64) -> DailyTargets {
    DailyTargets {
        calorie_goal,
        protein_grams_goal: Macronutrient::Protein.grams_from_kcal(calorie_goal * PROTEIN_CALORIE_SHARE),
        carb_grams_goal: Macronutrient::Carbohydrate.grams_from_kcal(calorie_goal * CARB_CALORIE_SHARE),
        fat_grams_goal: Macronutrient::Fat.grams_from_kcal(calorie_goal * FAT_CALORIE_SHARE),
    }
}

/// Calculate the complete energy breakdown for a profile
pub fn compute_energy_breakdown(profile: &Profile) -> EnergyBreakdown {
    let bmr = calculate_bmr_mifflin(profile.weight, profile.height, profile.age, profile.sex);
    let activity_multiplier = profile.activity_level.multiplier();
    let tdee = bmr * activity_multiplier;
    let goal_adjustment = profile.goal.calorie_adjustment();

    EnergyBreakdown {
        bmr,
        activity_multiplier,
        tdee,
        goal_adjustment,
        targets: targets_from_calories(tdee + goal_adjustment),
    }
}

/// Compute daily calorie and macro targets for a profile
pub fn compute_targets(profile: &Profile) -> DailyTargets {
    compute_energy_breakdown(profile).targets
}
