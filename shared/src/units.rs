//! Macronutrient energy conversion
//!
//! Every macro gram target is derived from a calorie budget, so the
//! kcal-per-gram factors live here rather than inline in the calculator.

use serde::{Deserialize, Serialize};

/// Macronutrient with a fixed energy density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macronutrient {
    Protein,
    Carbohydrate,
    Fat,
}

impl Macronutrient {
    /// Energy density in kcal per gram
    pub fn kcal_per_gram(&self) -> f64 {
        match self {
            Macronutrient::Protein => 4.0,
            Macronutrient::Carbohydrate => 4.0,
            Macronutrient::Fat => 9.0,
        }
    }

    /// Convert a calorie budget into grams of this macro
    pub fn grams_from_kcal(&self, kcal: f64) -> f64 {
        kcal / self.kcal_per_gram()
    }
}
