// ABOUTME: macrolog CLI - compute daily macro targets from body metrics
// ABOUTME: Thin demonstration surface over the macrolog library, prints JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 macrolog contributors

//!
//! Usage:
//! ```bash
//! # Imperial height, bodyweight protein mode
//! macrolog-cli targets --weight 180 --weight-unit lbs --feet 5 --inches 10 \
//!     --age 30 --sex male --activity moderate --goal maintenance --focus health
//!
//! # Metric height, lean-mass protein mode
//! macrolog-cli targets --weight 82 --weight-unit kg --height-cm 178 \
//!     --age 30 --sex male --activity active --goal loss --focus performance \
//!     --body-fat 18
//! ```

use clap::{Parser, Subcommand};
use macrolog::calculator::{
    calculate_macros, ActivityLevel, BiologicalSex, CalculatorInputs, GoalType, TrainingFocus,
};
use macrolog::config::CalculatorConfig;
use macrolog::errors::{AppError, AppResult};
use macrolog::logging::{self, LogFormat, LoggingConfig};
use macrolog::units::{Height, Weight};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "macrolog-cli",
    about = "macrolog nutrition target calculator",
    long_about = "Compute daily calorie and macro targets (BMR, TDEE, protein, carbs, fat, fiber) from body metrics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute daily macro targets and print them as JSON
    Targets {
        /// Body weight (in the unit given by --weight-unit)
        #[arg(long)]
        weight: f64,

        /// Weight unit: lbs or kg
        #[arg(long, default_value = "lbs")]
        weight_unit: String,

        /// Height feet component (imperial; use with --inches)
        #[arg(long, conflicts_with = "height_cm")]
        feet: Option<f64>,

        /// Height inches component (imperial; use with --feet)
        #[arg(long, conflicts_with = "height_cm")]
        inches: Option<f64>,

        /// Height in centimeters (metric; alternative to --feet/--inches)
        #[arg(long)]
        height_cm: Option<f64>,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Biological sex: male or female
        #[arg(long)]
        sex: String,

        /// Activity level: sedentary, light, moderate, active, very_active
        #[arg(long)]
        activity: String,

        /// Goal: loss, maintenance, gain
        #[arg(long, default_value = "maintenance")]
        goal: String,

        /// Training focus: tone, performance, health
        #[arg(long, default_value = "health")]
        focus: String,

        /// Body fat percentage (enables lean-mass protein mode)
        #[arg(long)]
        body_fat: Option<f64>,
    },
}

fn parse_sex(s: &str) -> AppResult<BiologicalSex> {
    match s.to_lowercase().as_str() {
        "male" | "m" => Ok(BiologicalSex::Male),
        "female" | "f" => Ok(BiologicalSex::Female),
        other => Err(AppError::invalid_input(format!(
            "unknown sex '{other}' (expected male or female)"
        ))),
    }
}

fn parse_activity(s: &str) -> AppResult<ActivityLevel> {
    match s.to_lowercase().as_str() {
        "sedentary" => Ok(ActivityLevel::Sedentary),
        "light" => Ok(ActivityLevel::Light),
        "moderate" => Ok(ActivityLevel::Moderate),
        "active" => Ok(ActivityLevel::Active),
        "very_active" | "very-active" => Ok(ActivityLevel::VeryActive),
        other => Err(AppError::invalid_input(format!(
            "unknown activity level '{other}' (expected sedentary, light, moderate, active, or very_active)"
        ))),
    }
}

fn parse_goal(s: &str) -> AppResult<GoalType> {
    match s.to_lowercase().as_str() {
        "loss" => Ok(GoalType::Loss),
        "maintenance" => Ok(GoalType::Maintenance),
        "gain" => Ok(GoalType::Gain),
        other => Err(AppError::invalid_input(format!(
            "unknown goal '{other}' (expected loss, maintenance, or gain)"
        ))),
    }
}

fn parse_focus(s: &str) -> AppResult<TrainingFocus> {
    match s.to_lowercase().as_str() {
        "tone" => Ok(TrainingFocus::Tone),
        "performance" => Ok(TrainingFocus::Performance),
        "health" => Ok(TrainingFocus::Health),
        other => Err(AppError::invalid_input(format!(
            "unknown training focus '{other}' (expected tone, performance, or health)"
        ))),
    }
}

fn parse_weight(value: f64, unit: &str) -> AppResult<Weight> {
    match unit.to_lowercase().as_str() {
        "lbs" | "lb" => Ok(Weight::Lbs(value)),
        "kg" => Ok(Weight::Kg(value)),
        other => Err(AppError::invalid_input(format!(
            "unknown weight unit '{other}' (expected lbs or kg)"
        ))),
    }
}

fn parse_height(feet: Option<f64>, inches: Option<f64>, height_cm: Option<f64>) -> AppResult<Height> {
    match (height_cm, feet) {
        (Some(cm), _) => Ok(Height::Cm { value: cm }),
        (None, Some(feet)) => Ok(Height::FtIn {
            feet,
            inches: inches.unwrap_or(0.0),
        }),
        (None, None) => Err(AppError::missing_field(
            "height required: pass --height-cm or --feet/--inches",
        )),
    }
}

fn run_targets(cli_inputs: CalculatorInputs) -> AppResult<()> {
    cli_inputs.validate()?;

    let config = CalculatorConfig::default();
    config.validate()?;

    let macros = calculate_macros(&cli_inputs, &config);
    info!(
        bmr = macros.bmr,
        tdee = macros.tdee,
        calories = macros.calories,
        "computed macro targets"
    );

    let json = serde_json::to_string_pretty(&macros)
        .map_err(|e| AppError::invalid_input(format!("failed to serialize result: {e}")))?;
    println!("{json}");
    Ok(())
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let logging_config = LoggingConfig {
        level: if cli.verbose { "debug" } else { "info" }.to_owned(),
        format: if cli.log_json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        },
    };
    logging::init(&logging_config)?;

    match cli.command {
        Command::Targets {
            weight,
            weight_unit,
            feet,
            inches,
            height_cm,
            age,
            sex,
            activity,
            goal,
            focus,
            body_fat,
        } => {
            let inputs = CalculatorInputs {
                weight: parse_weight(weight, &weight_unit)?,
                height: parse_height(feet, inches, height_cm)?,
                age,
                biological_sex: parse_sex(&sex)?,
                activity_level: parse_activity(&activity)?,
                goal_type: parse_goal(&goal)?,
                training_focus: parse_focus(&focus)?,
                body_fat_percent: body_fat,
            };
            run_targets(inputs)
        }
    }
}
