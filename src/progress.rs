// ABOUTME: Daily progress against macro targets and calendar day classification
// ABOUTME: Remaining macros, calorie progress fraction, and DayStatus banding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 macrolog contributors

//! Progress derivation for the calendar view.
//!
//! Pure functions from a day's logged totals and the user's targets to the
//! values the calendar surfaces: remaining macros, a calorie progress
//! fraction, and a coarse day status.

use crate::models::{DailyLog, MacroTargets, Nutrients};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default symmetric tolerance band around target calories for `OnTarget`
pub const DEFAULT_CALORIE_TOLERANCE: f64 = 0.05;

/// Coarse classification of a day against its calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Nothing logged
    Empty,
    /// Below the tolerance band
    Under,
    /// Within the tolerance band
    OnTarget,
    /// Above the tolerance band
    Over,
}

/// Summary of one day's consumption
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DaySummary {
    /// Calendar date
    pub date: NaiveDate,
    /// Total nutrients consumed
    pub consumed: Nutrients,
    /// Number of logged entries
    pub logged_entries: usize,
}

impl DaySummary {
    /// Summarize a daily log
    #[must_use]
    pub fn from_log(log: &DailyLog) -> Self {
        Self {
            date: log.date,
            consumed: log.totals(),
            logged_entries: log.entries.len(),
        }
    }

    /// Classify this day against targets using the default tolerance
    #[must_use]
    pub fn status(&self, targets: MacroTargets) -> DayStatus {
        self.status_with_tolerance(targets, DEFAULT_CALORIE_TOLERANCE)
    }

    /// Classify this day against targets with an explicit tolerance band
    #[must_use]
    pub fn status_with_tolerance(&self, targets: MacroTargets, tolerance: f64) -> DayStatus {
        if self.logged_entries == 0 {
            return DayStatus::Empty;
        }
        let progress = calorie_progress(targets, self.consumed);
        if progress < 1.0 - tolerance {
            DayStatus::Under
        } else if progress > 1.0 + tolerance {
            DayStatus::Over
        } else {
            DayStatus::OnTarget
        }
    }
}

/// Macros still available for the day, element-wise and clamped at zero
#[must_use]
pub fn remaining(targets: MacroTargets, consumed: Nutrients) -> Nutrients {
    Nutrients {
        calories: (f64::from(targets.calories) - consumed.calories).max(0.0),
        protein_g: (f64::from(targets.protein_g) - consumed.protein_g).max(0.0),
        carbs_g: (f64::from(targets.carbs_g) - consumed.carbs_g).max(0.0),
        fat_g: (f64::from(targets.fat_g) - consumed.fat_g).max(0.0),
        fiber_g: (f64::from(targets.fiber_g) - consumed.fiber_g).max(0.0),
    }
}

/// Fraction of target calories consumed (0.0 when the target is 0)
#[must_use]
pub fn calorie_progress(targets: MacroTargets, consumed: Nutrients) -> f64 {
    if targets.calories == 0 {
        return 0.0;
    }
    consumed.calories / f64::from(targets.calories)
}
