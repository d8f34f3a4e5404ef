// ABOUTME: Pet feeding intelligence: energy, portions, food grading, diet transitions
// ABOUTME: Pure calculation modules with no I/O; all tuning comes from config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Deterministic feeding calculations. Every function here is total over its
//! valid domain and rejects invalid numeric input with `InvalidInput`.

/// Diet transition schedules
pub mod diet_transition;
/// RER/MER energy needs and cup/gram portions
pub mod energy_calculator;
/// Weighted letter-grade food scoring
pub mod food_grading;
/// Kcal, gram, and measurable-cup rounding
pub mod rounding;

pub use diet_transition::{
    calculate_standard_transition, calculate_transition, TransitionDay, TransitionDuration,
    TransitionPlan,
};
pub use energy_calculator::{
    calculate_feeding, calculate_portions, calculate_portions_for_food, calculate_rer,
    mer_multiplier, EnergyResult, PortionResult,
};
pub use food_grading::{grade_food, GradingCategory, GradingResult, LetterGrade};
pub use rounding::{cups_to_grams, round_half_up, round_to_measurable_cups, round_to_nearest};
