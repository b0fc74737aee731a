// ABOUTME: Typed body-measurement values carrying their unit of record
// ABOUTME: Weight (lb/kg) and Height (ft-in/cm) with lossless conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 macrolog contributors

//! Typed units for body measurements.
//!
//! The target pipeline consumes weight in two different units (kilograms for
//! BMR, pounds for protein and the fat floor), so weight and height are
//! carried as tagged values rather than bare floats. Conversions never round;
//! rounding happens only at formula boundaries in the calculator.

use serde::{Deserialize, Serialize};

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;

/// Inches per foot
pub const IN_PER_FT: f64 = 12.0;

/// Body weight tagged with its unit of record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Weight {
    /// Weight recorded in pounds
    Lbs(f64),
    /// Weight recorded in kilograms
    Kg(f64),
}

impl Weight {
    /// Weight in kilograms
    #[must_use]
    pub fn kilograms(&self) -> f64 {
        match *self {
            Self::Lbs(lbs) => lbs * KG_PER_LB,
            Self::Kg(kg) => kg,
        }
    }

    /// Weight in pounds
    #[must_use]
    pub fn pounds(&self) -> f64 {
        match *self {
            Self::Lbs(lbs) => lbs,
            Self::Kg(kg) => kg / KG_PER_LB,
        }
    }

    /// Raw recorded value, whatever the unit
    #[must_use]
    pub const fn raw(&self) -> f64 {
        match *self {
            Self::Lbs(v) | Self::Kg(v) => v,
        }
    }
}

/// Body height tagged with its unit of record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum Height {
    /// Height recorded as feet plus inches
    FtIn {
        /// Whole feet component
        feet: f64,
        /// Inches component
        inches: f64,
    },
    /// Height recorded in centimeters
    Cm {
        /// Centimeters
        value: f64,
    },
}

impl Height {
    /// Height in centimeters
    #[must_use]
    pub fn centimeters(&self) -> f64 {
        match *self {
            Self::FtIn { feet, inches } => feet.mul_add(IN_PER_FT, inches) * CM_PER_IN,
            Self::Cm { value } => value,
        }
    }

    /// Height in total inches
    #[must_use]
    pub fn inches(&self) -> f64 {
        self.centimeters() / CM_PER_IN
    }
}

/// Convert centimeters back to whole feet plus inches.
///
/// Inches are rounded to the nearest whole inch; 12 inches carries into the
/// foot component so the result is always normalized (0..=11 inches).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cm_to_ft_in(cm: f64) -> (u32, u32) {
    let total_inches = (cm / CM_PER_IN).round().max(0.0) as u32;
    (total_inches / 12, total_inches % 12)
}
