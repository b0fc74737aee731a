// ABOUTME: Main library entry point for the macrolog nutrition-tracking core
// ABOUTME: Macro target calculator plus food catalog, daily log, and progress models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 macrolog contributors

#![deny(unsafe_code)]

//! # macrolog
//!
//! The domain core of a calorie/macro-tracking application: a pure macro
//! target calculation engine plus the food catalog, daily log, and progress
//! models that surround it. Persistence, networking, and UI belong to
//! collaborators; everything in this crate is synchronous, deterministic, and
//! safe to call from any number of threads.
//!
//! ## Modules
//!
//! - **calculator**: BMR (Mifflin-St Jeor), TDEE, goal-adjusted calories,
//!   protein, carb/fat split with fat floor, fiber - one pure pipeline
//! - **units**: typed `Weight` and `Height` values carrying their unit
//! - **config**: coefficient tables with defaults and validation
//! - **models**: foods, logged entries, daily logs, macro targets
//! - **catalog**: in-memory personal food database with ranked search
//! - **progress**: per-day status against targets for the calendar view
//!
//! ## Example
//!
//! ```rust
//! use macrolog::calculator::{
//!     calculate_macros, ActivityLevel, BiologicalSex, CalculatorInputs, GoalType, TrainingFocus,
//! };
//! use macrolog::config::CalculatorConfig;
//! use macrolog::units::{Height, Weight};
//!
//! let inputs = CalculatorInputs {
//!     weight: Weight::Lbs(180.0),
//!     height: Height::FtIn { feet: 5.0, inches: 10.0 },
//!     age: 30,
//!     biological_sex: BiologicalSex::Male,
//!     activity_level: ActivityLevel::Moderate,
//!     goal_type: GoalType::Maintenance,
//!     training_focus: TrainingFocus::Health,
//!     body_fat_percent: None,
//! };
//! inputs.validate().expect("inputs in range");
//!
//! let macros = calculate_macros(&inputs, &CalculatorConfig::default());
//! assert_eq!(macros.calories, 2764);
//! assert_eq!(macros.protein_g, 153);
//! ```

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod progress;
pub mod units;
