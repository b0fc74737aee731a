// ABOUTME: Food-tracking domain models: foods, logged entries, daily logs, targets
// ABOUTME: Nutrients arithmetic shared by the calculator, catalog, and progress code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 macrolog contributors

use crate::calculator::CalculatedMacros;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use uuid::Uuid;

/// Type of meal a food entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string, mapping anything unrecognized to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// Nutrient totals for a serving, an entry, or a whole day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Fiber (grams)
    pub fiber_g: f64,
}

impl Nutrients {
    /// Scale all values by a serving multiplier
    #[must_use]
    pub fn scale(&self, servings: f64) -> Self {
        Self {
            calories: self.calories * servings,
            protein_g: self.protein_g * servings,
            carbs_g: self.carbs_g * servings,
            fat_g: self.fat_g * servings,
            fiber_g: self.fiber_g * servings,
        }
    }
}

impl Add for Nutrients {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
            fiber_g: self.fiber_g + rhs.fiber_g,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Entry in the user's personal food database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Unique identifier
    pub id: Uuid,
    /// Food name
    pub name: String,
    /// Brand name (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Serving size amount
    pub serving_size: f64,
    /// Serving unit (g, oz, cup, etc.)
    pub serving_unit: String,
    /// Nutrients per single serving
    pub per_serving: Nutrients,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Food {
    /// Create a new food with a fresh id and the current timestamp
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        serving_size: f64,
        serving_unit: impl Into<String>,
        per_serving: Nutrients,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            brand: None,
            serving_size,
            serving_unit: serving_unit.into(),
            per_serving,
            created_at: Utc::now(),
        }
    }

    /// Attach a brand name
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }
}

/// A logged portion of a food within a day
///
/// Carries a snapshot of the food's per-serving nutrients, so later edits to
/// the catalog entry do not rewrite logged history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Unique identifier of this log entry
    pub id: Uuid,
    /// Id of the catalog food this entry was logged from
    pub food_id: Uuid,
    /// Food name at log time
    pub food_name: String,
    /// Number of servings consumed
    pub servings: f64,
    /// Which meal the entry belongs to
    pub meal_type: MealType,
    /// Per-serving nutrient snapshot
    pub per_serving: Nutrients,
    /// Timestamp when the entry was logged
    pub logged_at: DateTime<Utc>,
}

impl FoodEntry {
    /// Log a portion of a catalog food
    #[must_use]
    pub fn log(food: &Food, servings: f64, meal_type: MealType) -> Self {
        Self {
            id: Uuid::new_v4(),
            food_id: food.id,
            food_name: food.name.clone(),
            servings,
            meal_type,
            per_serving: food.per_serving,
            logged_at: Utc::now(),
        }
    }

    /// Total nutrients of this entry (per-serving snapshot times servings)
    #[must_use]
    pub fn nutrients(&self) -> Nutrients {
        self.per_serving.scale(self.servings)
    }
}

/// All food entries logged for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
    /// Calendar date of the log
    pub date: NaiveDate,
    /// Logged entries, in log order
    pub entries: Vec<FoodEntry>,
}

impl DailyLog {
    /// Create an empty log for a date
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    /// Append a logged entry
    pub fn add_entry(&mut self, entry: FoodEntry) {
        self.entries.push(entry);
    }

    /// Remove an entry by id; returns the removed entry if it existed
    pub fn remove_entry(&mut self, id: Uuid) -> Option<FoodEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Total nutrients across all entries
    #[must_use]
    pub fn totals(&self) -> Nutrients {
        self.entries.iter().map(FoodEntry::nutrients).sum()
    }

    /// Total nutrients for one meal
    #[must_use]
    pub fn meal_totals(&self, meal_type: MealType) -> Nutrients {
        self.entries
            .iter()
            .filter(|e| e.meal_type == meal_type)
            .map(FoodEntry::nutrients)
            .sum()
    }
}

/// Persisted daily macro targets - the user's goals record downstream of the
/// calculator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Target calories (kcal/day)
    pub calories: u32,
    /// Target protein (grams)
    pub protein_g: u32,
    /// Target carbohydrates (grams)
    pub carbs_g: u32,
    /// Target fat (grams)
    pub fat_g: u32,
    /// Target fiber (grams)
    pub fiber_g: u32,
}

impl From<&CalculatedMacros> for MacroTargets {
    fn from(macros: &CalculatedMacros) -> Self {
        Self {
            calories: macros.calories,
            protein_g: macros.protein_g,
            carbs_g: macros.carbs_g,
            fat_g: macros.fat_g,
            fiber_g: macros.fiber_g,
        }
    }
}
