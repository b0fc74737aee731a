// ABOUTME: Macro target calculation pipeline: BMR, TDEE, calories, macros, fiber
// ABOUTME: Pure functions over CalculatorInputs producing integer CalculatedMacros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 macrolog contributors

//! Macro Target Calculator
//!
//! Single-pass pure pipeline: unit normalization, BMR (Mifflin-St Jeor), TDEE
//! (activity multiplier), goal-adjusted calories, protein target, carb/fat
//! split with a minimum fat floor, fiber target.
//!
//! Every function here is total on numeric input: no I/O, no hidden state, no
//! errors. Range checking is the caller's contract and lives in
//! [`CalculatorInputs::validate`]; the arithmetic itself never rejects.
//! Rounding happens only at formula boundaries, and rounded integers flow
//! between stages (TDEE is computed from the rounded BMR, and so on).
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. DOI: 10.1093/ajcn/51.2.241
//! - USDA Dietary Guidelines: 14 g fiber per 1000 kcal

use crate::config::{
    ActivityFactorsConfig, BmrConfig, CalculatorConfig, FiberConfig, GoalAdjustmentsConfig,
    MacroSplitConfig, ProteinConfig,
};
use crate::errors::{AppError, AppResult};
use crate::units::{Height, Weight};
use serde::{Deserialize, Serialize};

/// Biological sex for BMR calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Male (+5 BMR constant)
    Male,
    /// Female (-161 BMR constant)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise: 1.2
    Sedentary,
    /// Light exercise 1-3 days/week: 1.375
    Light,
    /// Moderate exercise 3-5 days/week: 1.55
    Moderate,
    /// Hard exercise 6-7 days/week: 1.725
    Active,
    /// Hard daily training or physical job: 1.9
    VeryActive,
}

/// Goal type driving the calorie adjustment and protein factors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Caloric deficit (-20%)
    Loss,
    /// Caloric balance
    Maintenance,
    /// Caloric surplus (+10%)
    Gain,
}

/// Training focus driving the carb/fat split of remaining calories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFocus {
    /// Body composition focus: 55/45 carb/fat
    Tone,
    /// Performance focus: 65/35 carb/fat
    Performance,
    /// General health: 50/50 carb/fat
    Health,
}

/// Inputs to the macro target calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Body weight with its unit of record
    pub weight: Weight,
    /// Height with its unit of record
    pub height: Height,
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub biological_sex: BiologicalSex,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Goal type
    pub goal_type: GoalType,
    /// Training focus
    pub training_focus: TrainingFocus,
    /// Optional body fat percentage (0-100); enables lean-mass protein mode
    /// when strictly between 0 and 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
}

impl CalculatorInputs {
    /// Validate inputs at the API boundary.
    ///
    /// The pipeline itself is total and will happily compute on pathological
    /// numbers; callers that want range enforcement invoke this first.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` or `ErrorCode::InvalidInput` for
    /// non-finite or out-of-range values.
    pub fn validate(&self) -> AppResult<()> {
        let weight = self.weight.raw();
        if !weight.is_finite() || weight <= 0.0 {
            return Err(AppError::value_out_of_range(
                "weight must be a positive number",
            ));
        }
        let height_cm = self.height.centimeters();
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(AppError::value_out_of_range(
                "height must be a positive number",
            ));
        }
        if let Height::FtIn { feet, inches } = self.height {
            if feet < 0.0 || inches < 0.0 {
                return Err(AppError::value_out_of_range(
                    "height components must be non-negative",
                ));
            }
        }
        if !(1..=120).contains(&self.age) {
            return Err(AppError::value_out_of_range(
                "age must be between 1 and 120 years",
            ));
        }
        if let Some(bf) = self.body_fat_percent {
            if !bf.is_finite() || !(0.0..=100.0).contains(&bf) {
                return Err(AppError::value_out_of_range(
                    "body fat percent must be between 0 and 100",
                ));
            }
        }
        Ok(())
    }
}

/// Complete macro target calculation result
///
/// All values are non-negative integers, rounded at formula boundaries.
/// Derived fresh on every call; downstream code persists this as the user's
/// goals record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculatedMacros {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: u32,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: u32,
    /// Goal-adjusted target calories (kcal/day)
    pub calories: u32,
    /// Daily protein target (grams)
    pub protein_g: u32,
    /// Daily carbohydrate target (grams)
    pub carbs_g: u32,
    /// Daily fat target (grams)
    pub fat_g: u32,
    /// Daily fiber target (grams)
    pub fiber_g: u32,
}

/// Calories per gram of protein and carbohydrate
const KCAL_PER_G_PROTEIN_CARB: f64 = 4.0;

/// Calories per gram of fat
const KCAL_PER_G_FAT: f64 = 9.0;

/// Round to the nearest non-negative integer.
///
/// Non-finite input collapses to 0 so the pipeline stays total even on
/// pathological values the caller declined to validate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_non_negative(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: `bmr = 10*weight_kg + 6.25*height_cm - 5*age + sex_constant`
/// where the sex constant is +5 for males and -161 for females.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: BiologicalSex,
    config: &BmrConfig,
) -> u32 {
    let sex_constant = match sex {
        BiologicalSex::Male => config.msj_male_constant,
        BiologicalSex::Female => config.msj_female_constant,
    };
    let base = config.msj_weight_coef.mul_add(
        weight_kg,
        config
            .msj_height_coef
            .mul_add(height_cm, config.msj_age_coef * f64::from(age)),
    );
    round_non_negative(base + sex_constant)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: `tdee = round(bmr * activity_factor)`
///
/// Exhaustive match over the closed activity enum; there is no "unknown"
/// fallthrough multiplier.
#[must_use]
pub fn calculate_tdee(bmr: u32, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> u32 {
    let factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    };
    round_non_negative(f64::from(bmr) * factor)
}

/// Calculate goal-adjusted target calories
///
/// Formula: `calories = round(tdee * (1 + adjustment))` with percentage-based
/// adjustments, so the deficit or surplus scales with the individual's TDEE.
#[must_use]
pub fn calculate_target_calories(
    tdee: u32,
    goal_type: GoalType,
    config: &GoalAdjustmentsConfig,
) -> u32 {
    let adjustment = match goal_type {
        GoalType::Loss => config.loss,
        GoalType::Maintenance => config.maintenance,
        GoalType::Gain => config.gain,
    };
    round_non_negative(f64::from(tdee) * (1.0 + adjustment))
}

/// Calculate the daily protein target in grams
///
/// Two modes, selected by the presence of a usable body fat percentage:
///
/// - **Lean-mass mode** (`0 < body_fat < 100`): lean mass in pounds times a
///   goal-specific g/lb-lean-mass factor.
/// - **Bodyweight mode** (fallback): total bodyweight in pounds times a
///   goal-specific g/lb factor.
///
/// Body fat of exactly 0 or 100 is treated as absent and falls back to
/// bodyweight mode. Weight is always taken in pounds here regardless of the
/// input unit of record.
#[must_use]
pub fn calculate_protein(
    weight_lbs: f64,
    goal_type: GoalType,
    body_fat_percent: Option<f64>,
    config: &ProteinConfig,
) -> u32 {
    let lean_mode = body_fat_percent.filter(|bf| *bf > 0.0 && *bf < 100.0);
    let grams = match lean_mode {
        Some(bf) => {
            let lean_mass_lbs = weight_lbs * (1.0 - bf / 100.0);
            let factor = match goal_type {
                GoalType::Loss => config.lean_loss_g_per_lb,
                GoalType::Maintenance => config.lean_maintenance_g_per_lb,
                GoalType::Gain => config.lean_gain_g_per_lb,
            };
            lean_mass_lbs * factor
        }
        None => {
            let factor = match goal_type {
                GoalType::Loss => config.bodyweight_loss_g_per_lb,
                GoalType::Maintenance => config.bodyweight_maintenance_g_per_lb,
                GoalType::Gain => config.bodyweight_gain_g_per_lb,
            };
            weight_lbs * factor
        }
    };
    round_non_negative(grams)
}

/// Split the calories remaining after protein into carb and fat grams
///
/// 1. remaining = max(0, calories - protein*4)
/// 2. ratio split by training focus
/// 3. fat floor: `round(weight_lbs * 0.3)` grams; if the ratio allocated less
///    fat than the floor, fat calories are clamped up to the floor and carbs
///    absorb the difference (down to 0)
///
/// The floor is applied after the ratio split and is not capped by the
/// remaining calories: at extreme inputs it can consume all remaining
/// calories, driving carbs to 0 while fat stays at the floor.
///
/// Returns `(carbs_g, fat_g)`.
#[must_use]
pub fn split_carbs_fat(
    calories: u32,
    protein_g: u32,
    weight_lbs: f64,
    focus: TrainingFocus,
    config: &MacroSplitConfig,
) -> (u32, u32) {
    let remaining =
        (f64::from(calories) - f64::from(protein_g) * KCAL_PER_G_PROTEIN_CARB).max(0.0);

    let ratio = match focus {
        TrainingFocus::Tone => config.tone,
        TrainingFocus::Performance => config.performance,
        TrainingFocus::Health => config.health,
    };

    let mut fat_calories = remaining * ratio.fat;
    let mut carb_calories = remaining * ratio.carbs;

    let min_fat_g = f64::from(round_non_negative(weight_lbs * config.fat_floor_g_per_lb));
    let min_fat_calories = min_fat_g * KCAL_PER_G_FAT;
    if fat_calories < min_fat_calories {
        fat_calories = min_fat_calories;
        carb_calories = remaining - fat_calories;
    }

    let carbs_g = round_non_negative(carb_calories / KCAL_PER_G_PROTEIN_CARB);
    let fat_g = round_non_negative(fat_calories / KCAL_PER_G_FAT);
    (carbs_g, fat_g)
}

/// Calculate the daily fiber target in grams
///
/// Formula: `fiber = round((calories / 1000) * 14)` per USDA guideline.
#[must_use]
pub fn calculate_fiber(calories: u32, config: &FiberConfig) -> u32 {
    round_non_negative(f64::from(calories) / 1000.0 * config.g_per_1000_kcal)
}

/// Calculate the complete set of macro targets
///
/// The main entry point: normalizes units, then runs BMR, TDEE, goal-adjusted
/// calories, protein, the carb/fat split, and fiber in order. Pure function
/// with no side effects; identical inputs always yield identical output.
#[must_use]
pub fn calculate_macros(inputs: &CalculatorInputs, config: &CalculatorConfig) -> CalculatedMacros {
    let weight_kg = inputs.weight.kilograms();
    let weight_lbs = inputs.weight.pounds();
    let height_cm = inputs.height.centimeters();

    let bmr = calculate_bmr(
        weight_kg,
        height_cm,
        inputs.age,
        inputs.biological_sex,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, inputs.activity_level, &config.activity_factors);
    let calories = calculate_target_calories(tdee, inputs.goal_type, &config.goal_adjustments);
    let protein_g = calculate_protein(
        weight_lbs,
        inputs.goal_type,
        inputs.body_fat_percent,
        &config.protein,
    );
    let (carbs_g, fat_g) = split_carbs_fat(
        calories,
        protein_g,
        weight_lbs,
        inputs.training_focus,
        &config.macro_split,
    );
    let fiber_g = calculate_fiber(calories, &config.fiber);

    CalculatedMacros {
        bmr,
        tdee,
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
    }
}
