// ABOUTME: Comprehensive algorithm tests for the macro target calculation pipeline
// ABOUTME: Covers BMR, TDEE, goal adjustment, protein modes, carb/fat split, fiber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 macrolog contributors
//! Comprehensive algorithm tests for the calculator module
//!
//! Covers the whole pipeline:
//! - Mifflin-St Jeor BMR (male/female)
//! - TDEE with all 5 activity levels and the monotonicity property
//! - Goal-adjusted calories (loss < maintenance < gain)
//! - Protein in bodyweight and lean-mass modes, including the 0/100 fallback
//! - Carb/fat split ratios per training focus and the fat floor clamp
//! - Fiber targets
//! - The complete worked scenario, unit invariance, and idempotence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macrolog::calculator::{
    calculate_bmr, calculate_fiber, calculate_macros, calculate_protein, calculate_target_calories,
    calculate_tdee, split_carbs_fat, ActivityLevel, BiologicalSex, CalculatorInputs, GoalType,
    TrainingFocus,
};
use macrolog::config::CalculatorConfig;
use macrolog::units::{Height, Weight};

fn config() -> CalculatorConfig {
    CalculatorConfig::default()
}

fn baseline_inputs() -> CalculatorInputs {
    CalculatorInputs {
        weight: Weight::Lbs(180.0),
        height: Height::FtIn {
            feet: 5.0,
            inches: 10.0,
        },
        age: 30,
        biological_sex: BiologicalSex::Male,
        activity_level: ActivityLevel::Moderate,
        goal_type: GoalType::Maintenance,
        training_focus: TrainingFocus::Health,
        body_fat_percent: None,
    }
}

// ============================================================================
// BMR CALCULATION TESTS - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_bmr_male_typical() {
    let config = config();

    // 30-year-old male, 75kg, 180cm
    // Expected: 10*75 + 6.25*180 - 5*30 + 5 = 750 + 1125 - 150 + 5 = 1730
    let bmr = calculate_bmr(75.0, 180.0, 30, BiologicalSex::Male, &config.bmr);
    assert_eq!(bmr, 1730);
}

#[test]
fn test_bmr_female_typical() {
    let config = config();

    // 25-year-old female, 60kg, 165cm
    // Expected: 10*60 + 6.25*165 - 5*25 - 161 = 600 + 1031.25 - 125 - 161 = 1345.25
    let bmr = calculate_bmr(60.0, 165.0, 25, BiologicalSex::Female, &config.bmr);
    assert_eq!(bmr, 1345);
}

#[test]
fn test_bmr_sex_constants_differ_by_166() {
    let config = config();
    let male = calculate_bmr(70.0, 175.0, 40, BiologicalSex::Male, &config.bmr);
    let female = calculate_bmr(70.0, 175.0, 40, BiologicalSex::Female, &config.bmr);
    assert_eq!(male - female, 166);
}

#[test]
fn test_bmr_worked_example_imperial_inputs() {
    let config = config();

    // 180 lbs = 81.6466 kg, 5'10" = 177.8 cm, 30-year-old male
    // Expected: 816.466 + 1111.25 - 150 + 5 = 1782.72 -> 1783
    let weight = Weight::Lbs(180.0);
    let height = Height::FtIn {
        feet: 5.0,
        inches: 10.0,
    };
    let bmr = calculate_bmr(
        weight.kilograms(),
        height.centimeters(),
        30,
        BiologicalSex::Male,
        &config.bmr,
    );
    assert_eq!(bmr, 1783);
}

// ============================================================================
// TDEE CALCULATION TESTS - Activity Level Multipliers
// ============================================================================

#[test]
fn test_tdee_all_levels_from_fixed_bmr() {
    let config = config();
    let bmr = 1783;

    let cases = [
        (ActivityLevel::Sedentary, 2140),   // 1783 * 1.2 = 2139.6
        (ActivityLevel::Light, 2452),       // 1783 * 1.375 = 2451.625
        (ActivityLevel::Moderate, 2764),    // 1783 * 1.55 = 2763.65
        (ActivityLevel::Active, 3076),      // 1783 * 1.725 = 3075.675
        (ActivityLevel::VeryActive, 3388),  // 1783 * 1.9 = 3387.7
    ];
    for (level, expected) in cases {
        assert_eq!(
            calculate_tdee(bmr, level, &config.activity_factors),
            expected,
            "unexpected TDEE for {level:?}"
        );
    }
}

#[test]
fn test_tdee_monotonically_increasing_in_activity() {
    let config = config();
    let bmr = 1500;
    let levels = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];
    let tdees: Vec<u32> = levels
        .iter()
        .map(|level| calculate_tdee(bmr, *level, &config.activity_factors))
        .collect();
    for window in tdees.windows(2) {
        assert!(window[0] < window[1], "TDEE must increase with activity");
    }
}

// ============================================================================
// GOAL ADJUSTMENT TESTS - Percentage-Based Calorie Shift
// ============================================================================

#[test]
fn test_goal_adjustments_from_fixed_tdee() {
    let config = config();
    let tdee = 2764;

    assert_eq!(
        calculate_target_calories(tdee, GoalType::Loss, &config.goal_adjustments),
        2211 // 2764 * 0.8 = 2211.2
    );
    assert_eq!(
        calculate_target_calories(tdee, GoalType::Maintenance, &config.goal_adjustments),
        2764
    );
    assert_eq!(
        calculate_target_calories(tdee, GoalType::Gain, &config.goal_adjustments),
        3040 // 2764 * 1.1 = 3040.4
    );
}

#[test]
fn test_goal_ordering_loss_below_tdee_below_gain() {
    let config = config();
    for tdee in [1200, 2000, 2764, 4000] {
        let loss = calculate_target_calories(tdee, GoalType::Loss, &config.goal_adjustments);
        let gain = calculate_target_calories(tdee, GoalType::Gain, &config.goal_adjustments);
        assert!(loss < tdee, "loss target must sit below TDEE");
        assert!(tdee < gain, "gain target must sit above TDEE");
    }
}

// ============================================================================
// PROTEIN CALCULATION TESTS - Bodyweight and Lean-Mass Modes
// ============================================================================

#[test]
fn test_protein_bodyweight_mode_per_goal() {
    let config = config();
    let weight_lbs = 180.0;

    // loss 1.0, maintenance 0.85, gain 0.9 g/lb
    assert_eq!(
        calculate_protein(weight_lbs, GoalType::Loss, None, &config.protein),
        180
    );
    assert_eq!(
        calculate_protein(weight_lbs, GoalType::Maintenance, None, &config.protein),
        153
    );
    assert_eq!(
        calculate_protein(weight_lbs, GoalType::Gain, None, &config.protein),
        162
    );
}

#[test]
fn test_protein_lean_mass_mode_per_goal() {
    let config = config();
    let weight_lbs = 180.0;
    let body_fat = Some(20.0); // lean mass = 144 lbs

    // loss 1.2, maintenance 1.0, gain 1.1 g/lb lean mass
    assert_eq!(
        calculate_protein(weight_lbs, GoalType::Loss, body_fat, &config.protein),
        173 // 144 * 1.2 = 172.8
    );
    assert_eq!(
        calculate_protein(weight_lbs, GoalType::Maintenance, body_fat, &config.protein),
        144
    );
    assert_eq!(
        calculate_protein(weight_lbs, GoalType::Gain, body_fat, &config.protein),
        158 // 144 * 1.1 = 158.4
    );
}

#[test]
fn test_protein_body_fat_boundary_values_fall_back() {
    let config = config();
    let bodyweight = calculate_protein(200.0, GoalType::Loss, None, &config.protein);

    // Exactly 0 and exactly 100 are treated as absent
    assert_eq!(
        calculate_protein(200.0, GoalType::Loss, Some(0.0), &config.protein),
        bodyweight
    );
    assert_eq!(
        calculate_protein(200.0, GoalType::Loss, Some(100.0), &config.protein),
        bodyweight
    );
}

// ============================================================================
// CARB/FAT SPLIT TESTS - Ratios and Fat Floor
// ============================================================================

#[test]
fn test_split_ratios_per_training_focus() {
    let config = config();
    // remaining = 2764 - 153*4 = 2152 kcal, floor 54 g (486 kcal) never binds
    let calories = 2764;
    let protein_g = 153;
    let weight_lbs = 180.0;

    // health 50/50: fat 1076/9 -> 120, carbs 1076/4 -> 269
    assert_eq!(
        split_carbs_fat(calories, protein_g, weight_lbs, TrainingFocus::Health, &config.macro_split),
        (269, 120)
    );
    // tone 55/45: fat 968.4/9 -> 108, carbs 1183.6/4 -> 296
    assert_eq!(
        split_carbs_fat(calories, protein_g, weight_lbs, TrainingFocus::Tone, &config.macro_split),
        (296, 108)
    );
    // performance 65/35: fat 753.2/9 -> 84, carbs 1398.8/4 -> 350
    assert_eq!(
        split_carbs_fat(
            calories,
            protein_g,
            weight_lbs,
            TrainingFocus::Performance,
            &config.macro_split
        ),
        (350, 84)
    );
}

#[test]
fn test_fat_floor_clamp_consumes_all_remaining_calories() {
    let config = config();

    // 250 lb sedentary female on a cut: calories 1606, protein 250 g,
    // remaining 606 kcal. Floor = round(250*0.3) = 75 g = 675 kcal, which
    // exceeds the remaining budget: fat clamps to the floor, carbs hit 0.
    let (carbs, fat) = split_carbs_fat(1606, 250, 250.0, TrainingFocus::Performance, &config.macro_split);
    assert_eq!(carbs, 0);
    assert_eq!(fat, 75);
}

#[test]
fn test_fat_floor_always_respected() {
    let config = config();

    for weight_lbs in [100.0_f64, 150.0, 200.0, 300.0] {
        for focus in [TrainingFocus::Tone, TrainingFocus::Performance, TrainingFocus::Health] {
            let (_, fat) = split_carbs_fat(1500, 160, weight_lbs, focus, &config.macro_split);
            let floor = (weight_lbs * 0.3).round() as u32;
            assert!(
                fat >= floor,
                "fat {fat} g below floor {floor} g at {weight_lbs} lbs"
            );
        }
    }
}

#[test]
fn test_split_with_protein_exceeding_calories() {
    let config = config();

    // remaining clamps to 0; fat still lands on the floor, carbs at 0
    let (carbs, fat) = split_carbs_fat(500, 200, 180.0, TrainingFocus::Health, &config.macro_split);
    assert_eq!(carbs, 0);
    assert_eq!(fat, 54);
}

// ============================================================================
// FIBER CALCULATION TESTS
// ============================================================================

#[test]
fn test_fiber_scales_with_calories() {
    let config = config();

    assert_eq!(calculate_fiber(1000, &config.fiber), 14);
    assert_eq!(calculate_fiber(2000, &config.fiber), 28);
    assert_eq!(calculate_fiber(2764, &config.fiber), 39); // 38.696
    assert_eq!(calculate_fiber(0, &config.fiber), 0);
}

// ============================================================================
// COMPLETE PIPELINE TESTS
// ============================================================================

#[test]
fn test_worked_scenario_matches_expected_targets() {
    // 180 lbs, 5'10", age 30, male, moderate, maintenance, health focus
    let macros = calculate_macros(&baseline_inputs(), &config());

    assert_eq!(macros.bmr, 1783);
    assert_eq!(macros.tdee, 2764);
    assert_eq!(macros.calories, 2764);
    assert_eq!(macros.protein_g, 153);
    assert_eq!(macros.carbs_g, 269);
    assert_eq!(macros.fat_g, 120);
    assert_eq!(macros.fiber_g, 39);
}

#[test]
fn test_unit_invariance_between_lbs_and_kg() {
    let config = config();
    let imperial = calculate_macros(&baseline_inputs(), &config);

    let mut metric_inputs = baseline_inputs();
    metric_inputs.weight = Weight::Kg(68.04); // != 180 lbs; close to 150 lbs
    let mut imperial_inputs = baseline_inputs();
    imperial_inputs.weight = Weight::Lbs(150.0);

    let metric = calculate_macros(&metric_inputs, &config);
    let from_lbs = calculate_macros(&imperial_inputs, &config);

    // 150 lbs ~= 68.0389 kg; every field agrees within integer rounding
    assert!(metric.bmr.abs_diff(from_lbs.bmr) <= 1);
    assert!(metric.tdee.abs_diff(from_lbs.tdee) <= 1);
    assert!(metric.calories.abs_diff(from_lbs.calories) <= 1);
    assert!(metric.protein_g.abs_diff(from_lbs.protein_g) <= 1);
    assert!(metric.carbs_g.abs_diff(from_lbs.carbs_g) <= 1);
    assert!(metric.fat_g.abs_diff(from_lbs.fat_g) <= 1);
    assert!(metric.fiber_g.abs_diff(from_lbs.fiber_g) <= 1);

    // Sanity: the 180 lb baseline differs from the 150 lb profile
    assert_ne!(imperial.protein_g, from_lbs.protein_g);
}

#[test]
fn test_idempotence_identical_inputs_identical_outputs() {
    let inputs = baseline_inputs();
    let config = config();
    assert_eq!(
        calculate_macros(&inputs, &config),
        calculate_macros(&inputs, &config)
    );
}

#[test]
fn test_all_outputs_non_negative_across_input_grid() {
    let config = config();
    let weights = [Weight::Lbs(90.0), Weight::Lbs(250.0), Weight::Kg(50.0)];
    let goals = [GoalType::Loss, GoalType::Maintenance, GoalType::Gain];
    let focuses = [TrainingFocus::Tone, TrainingFocus::Performance, TrainingFocus::Health];
    let body_fats = [None, Some(12.0), Some(45.0)];

    for weight in weights {
        for goal in goals {
            for focus in focuses {
                for body_fat in body_fats {
                    let inputs = CalculatorInputs {
                        weight,
                        height: Height::Cm { value: 170.0 },
                        age: 35,
                        biological_sex: BiologicalSex::Female,
                        activity_level: ActivityLevel::Light,
                        goal_type: goal,
                        training_focus: focus,
                        body_fat_percent: body_fat,
                    };
                    // u32 outputs cannot be negative; the meaningful property
                    // is that the pipeline stays consistent and calorie-backed
                    let macros = calculate_macros(&inputs, &config);
                    assert!(macros.bmr > 0);
                    assert!(macros.tdee >= macros.bmr);
                    assert!(macros.protein_g > 0);
                    assert!(macros.fiber_g > 0);
                }
            }
        }
    }
}

// ============================================================================
// INPUT VALIDATION TESTS - The Caller's Contract
// ============================================================================

#[test]
fn test_validate_accepts_baseline() {
    assert!(baseline_inputs().validate().is_ok());
}

#[test]
fn test_validate_rejects_out_of_range_values() {
    let mut inputs = baseline_inputs();
    inputs.age = 0;
    assert!(inputs.validate().is_err());

    let mut inputs = baseline_inputs();
    inputs.age = 121;
    assert!(inputs.validate().is_err());

    let mut inputs = baseline_inputs();
    inputs.weight = Weight::Lbs(0.0);
    assert!(inputs.validate().is_err());

    let mut inputs = baseline_inputs();
    inputs.weight = Weight::Kg(f64::NAN);
    assert!(inputs.validate().is_err());

    let mut inputs = baseline_inputs();
    inputs.height = Height::Cm { value: -170.0 };
    assert!(inputs.validate().is_err());

    let mut inputs = baseline_inputs();
    inputs.body_fat_percent = Some(101.0);
    assert!(inputs.validate().is_err());
}

#[test]
fn test_validate_accepts_body_fat_boundaries() {
    // 0 and 100 validate fine; the engine treats them as absent
    let mut inputs = baseline_inputs();
    inputs.body_fat_percent = Some(0.0);
    assert!(inputs.validate().is_ok());
    inputs.body_fat_percent = Some(100.0);
    assert!(inputs.validate().is_ok());
}

#[test]
fn test_engine_is_total_even_on_unvalidated_input() {
    // Pathological input the caller failed to validate: no panic, outputs
    // collapse to 0 rather than crashing
    let inputs = CalculatorInputs {
        weight: Weight::Lbs(f64::NAN),
        height: Height::Cm { value: f64::INFINITY },
        age: 30,
        biological_sex: BiologicalSex::Male,
        activity_level: ActivityLevel::Moderate,
        goal_type: GoalType::Maintenance,
        training_focus: TrainingFocus::Health,
        body_fat_percent: Some(f64::NAN),
    };
    let macros = calculate_macros(&inputs, &config());
    assert_eq!(macros.protein_g, 0);
}
