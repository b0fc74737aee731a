// ABOUTME: Coefficient tables for the macro target calculation pipeline
// ABOUTME: BMR formula constants, activity factors, goal adjustments, macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 macrolog contributors

//! Calculator Configuration
//!
//! Coefficient tables for target calculation. All tables are plain data with
//! sensible defaults; they are immutable at runtime by convention (the
//! calculator only ever borrows them).
//!
//! # Scientific References
//!
//! - BMR: Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
//!   Exercise Physiology
//! - Fiber: USDA Dietary Guidelines, 14 g per 1000 kcal

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Complete calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Percentage calorie adjustments per goal
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Protein targets in grams per pound
    pub protein: ProteinConfig,
    /// Carb/fat calorie split ratios and fat floor
    pub macro_split: MacroSplitConfig,
    /// Fiber target configuration
    pub fiber: FiberConfig,
}

impl CalculatorConfig {
    /// Validate every table in the configuration
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` naming the first offending value.
    pub fn validate(&self) -> AppResult<()> {
        self.activity_factors.validate()?;
        self.goal_adjustments.validate()?;
        self.protein.validate()?;
        self.macro_split.validate()?;
        self.fiber.validate()
    }
}

/// BMR (Basal Metabolic Rate) formula coefficients
///
/// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0, per kg)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25, per cm)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0, per year)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle` et al. (2010) - Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training 2x/day): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Validate that all multipliers are positive
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if any multiplier is not positive.
    pub fn validate(&self) -> AppResult<()> {
        let factors = [
            ("sedentary", self.sedentary),
            ("light", self.light),
            ("moderate", self.moderate),
            ("active", self.active),
            ("very_active", self.very_active),
        ];
        for (name, value) in factors {
            if value <= 0.0 || !value.is_finite() {
                return Err(AppError::config_invalid(format!(
                    "activity factor {name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Percentage calorie adjustments per goal type
///
/// Adjustments are fractions of TDEE, not fixed calorie amounts, so the
/// deficit/surplus scales with the individual's energy expenditure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Weight loss deficit: -0.20 (-20%)
    pub loss: f64,
    /// Maintenance: 0.0
    pub maintenance: f64,
    /// Weight gain surplus: +0.10 (+10%)
    pub gain: f64,
}

impl GoalAdjustmentsConfig {
    /// Validate that no adjustment zeroes out or inverts calories
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if any adjustment is -1.0 or below.
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("loss", self.loss),
            ("maintenance", self.maintenance),
            ("gain", self.gain),
        ] {
            if value <= -1.0 || !value.is_finite() {
                return Err(AppError::config_invalid(format!(
                    "goal adjustment {name} must be greater than -1.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            loss: -0.20,
            maintenance: 0.0,
            gain: 0.10,
        }
    }
}

/// Protein targets in grams per pound, per goal
///
/// Lean-mass factors apply when a usable body fat percentage is available;
/// bodyweight factors are the fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinConfig {
    /// Lean-mass mode, weight loss: 1.2 g/lb lean mass
    pub lean_loss_g_per_lb: f64,
    /// Lean-mass mode, maintenance: 1.0 g/lb lean mass
    pub lean_maintenance_g_per_lb: f64,
    /// Lean-mass mode, weight gain: 1.1 g/lb lean mass
    pub lean_gain_g_per_lb: f64,
    /// Bodyweight mode, weight loss: 1.0 g/lb
    pub bodyweight_loss_g_per_lb: f64,
    /// Bodyweight mode, maintenance: 0.85 g/lb
    pub bodyweight_maintenance_g_per_lb: f64,
    /// Bodyweight mode, weight gain: 0.9 g/lb
    pub bodyweight_gain_g_per_lb: f64,
}

impl ProteinConfig {
    /// Validate that all protein factors are positive
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if any factor is not positive.
    pub fn validate(&self) -> AppResult<()> {
        let factors = [
            ("lean_loss_g_per_lb", self.lean_loss_g_per_lb),
            ("lean_maintenance_g_per_lb", self.lean_maintenance_g_per_lb),
            ("lean_gain_g_per_lb", self.lean_gain_g_per_lb),
            ("bodyweight_loss_g_per_lb", self.bodyweight_loss_g_per_lb),
            (
                "bodyweight_maintenance_g_per_lb",
                self.bodyweight_maintenance_g_per_lb,
            ),
            ("bodyweight_gain_g_per_lb", self.bodyweight_gain_g_per_lb),
        ];
        for (name, value) in factors {
            if value <= 0.0 || !value.is_finite() {
                return Err(AppError::config_invalid(format!(
                    "protein factor {name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ProteinConfig {
    fn default() -> Self {
        Self {
            lean_loss_g_per_lb: 1.2,
            lean_maintenance_g_per_lb: 1.0,
            lean_gain_g_per_lb: 1.1,
            bodyweight_loss_g_per_lb: 1.0,
            bodyweight_maintenance_g_per_lb: 0.85,
            bodyweight_gain_g_per_lb: 0.9,
        }
    }
}

/// Carb/fat calorie split for one training focus
///
/// Both values are fractions of the calories remaining after protein; they
/// must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroRatio {
    /// Fraction of remaining calories allocated to carbohydrates
    pub carbs: f64,
    /// Fraction of remaining calories allocated to fat
    pub fat: f64,
}

impl MacroRatio {
    /// Create a new carb/fat ratio pair
    #[must_use]
    pub const fn new(carbs: f64, fat: f64) -> Self {
        Self { carbs, fat }
    }
}

/// Carb/fat split ratios per training focus, plus the fat floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Tone: 55% carbs / 45% fat of remaining calories
    pub tone: MacroRatio,
    /// Performance: 65% carbs / 35% fat
    pub performance: MacroRatio,
    /// Health: 50% carbs / 50% fat
    pub health: MacroRatio,
    /// Minimum fat in grams per pound bodyweight: 0.3
    pub fat_floor_g_per_lb: f64,
}

impl MacroSplitConfig {
    /// Validate that each ratio pair sums to 1.0 and the fat floor is sane
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` naming the offending focus or floor.
    pub fn validate(&self) -> AppResult<()> {
        let ratios = [
            ("tone", self.tone),
            ("performance", self.performance),
            ("health", self.health),
        ];
        for (name, ratio) in ratios {
            let sum = ratio.carbs + ratio.fat;
            if (sum - 1.0).abs() > 1e-9 {
                return Err(AppError::config_invalid(format!(
                    "{name} carb/fat ratios must sum to 1.0, got {sum}"
                )));
            }
            if ratio.carbs < 0.0 || ratio.fat < 0.0 {
                return Err(AppError::config_invalid(format!(
                    "{name} carb/fat ratios must be non-negative"
                )));
            }
        }
        if self.fat_floor_g_per_lb < 0.0 || !self.fat_floor_g_per_lb.is_finite() {
            return Err(AppError::config_invalid(format!(
                "fat floor must be non-negative, got {}",
                self.fat_floor_g_per_lb
            )));
        }
        Ok(())
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            tone: MacroRatio::new(0.55, 0.45),
            performance: MacroRatio::new(0.65, 0.35),
            health: MacroRatio::new(0.50, 0.50),
            fat_floor_g_per_lb: 0.3,
        }
    }
}

/// Fiber target configuration
///
/// Reference: USDA Dietary Guidelines - 14 g fiber per 1000 kcal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiberConfig {
    /// Grams of fiber per 1000 kcal of target calories: 14.0
    pub g_per_1000_kcal: f64,
}

impl FiberConfig {
    /// Validate that the fiber factor is non-negative
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the factor is negative.
    pub fn validate(&self) -> AppResult<()> {
        if self.g_per_1000_kcal < 0.0 || !self.g_per_1000_kcal.is_finite() {
            return Err(AppError::config_invalid(format!(
                "fiber g per 1000 kcal must be non-negative, got {}",
                self.g_per_1000_kcal
            )));
        }
        Ok(())
    }
}

impl Default for FiberConfig {
    fn default() -> Self {
        Self {
            g_per_1000_kcal: 14.0,
        }
    }
}
