// ABOUTME: Day-by-day schedule for moving a pet from one food to another
// ABOUTME: Linear ramp of the new food with old/new percentages that always sum to 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diet Transition Planner
//!
//! Day `d` of an `n`-day plan feeds `round(100 x d / n)` percent of the new
//! food. The old food share is the complement, so each day sums to exactly
//! 100 and the final day is always 100% new food. Both shares are expressed
//! in the pet's current serving; no caloric conversion between foods.

use super::rounding::{round_half_up, round_to_measurable_cups};
use petfeed_core::constants::units::PERCENT_SCALE;
use petfeed_core::errors::{AppError, AppResult};
use petfeed_core::models::FoodRecord;
use serde::{Deserialize, Serialize};

/// Common transition lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionDuration {
    /// 7 days
    #[default]
    Week,
    /// 10 days
    TenDays,
    /// 14 days, for sensitive stomachs
    TwoWeeks,
}

impl TransitionDuration {
    /// Length in days
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::TenDays => 10,
            Self::TwoWeeks => 14,
        }
    }
}

/// One day of the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionDay {
    /// 1-based day number
    pub day: u32,
    /// Share of the current food
    pub old_food_percent: u8,
    /// Share of the new food
    pub new_food_percent: u8,
    /// Measurable label for the current food amount
    pub old_food_cups: String,
    /// Measurable label for the new food amount
    pub new_food_cups: String,
}

/// Complete transition schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionPlan {
    /// Food being phased out
    pub current_food: FoodRecord,
    /// Food being phased in
    pub new_food: FoodRecord,
    /// Days 1 through N in order
    pub days: Vec<TransitionDay>,
}

impl TransitionPlan {
    /// Schedule entry for 1-based `day`
    #[must_use]
    pub fn day(&self, day: u32) -> Option<&TransitionDay> {
        let index = usize::try_from(day.checked_sub(1)?).ok()?;
        self.days.get(index)
    }

    /// Number of days in the plan
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always false for plans built by [`calculate_transition`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// New food percentage for `day` of `total_days`
fn new_food_percent(day: u32, total_days: u32) -> u8 {
    let percent = PERCENT_SCALE * f64::from(day) / f64::from(total_days);
    round_half_up(percent).clamp(0.0, PERCENT_SCALE) as u8
}

/// Build a `days`-long transition from `current_food` to `new_food`
///
/// # Errors
///
/// Returns `InvalidInput` if `days` is zero or the portion is negative or not finite
pub fn calculate_transition(
    current_food: &FoodRecord,
    new_food: &FoodRecord,
    current_portion_cups: f64,
    days: u32,
) -> AppResult<TransitionPlan> {
    if days == 0 {
        return Err(AppError::invalid_input(
            "Transition must last at least one day",
        ));
    }
    if !current_portion_cups.is_finite() || current_portion_cups < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Current portion must be a non-negative number of cups, got {current_portion_cups}"
        )));
    }

    let schedule = (1..=days)
        .map(|day| {
            let new_percent = new_food_percent(day, days);
            let old_percent = 100 - new_percent;
            TransitionDay {
                day,
                old_food_percent: old_percent,
                new_food_percent: new_percent,
                old_food_cups: round_to_measurable_cups(
                    f64::from(old_percent) / PERCENT_SCALE * current_portion_cups,
                ),
                new_food_cups: round_to_measurable_cups(
                    f64::from(new_percent) / PERCENT_SCALE * current_portion_cups,
                ),
            }
        })
        .collect();

    Ok(TransitionPlan {
        current_food: current_food.clone(),
        new_food: new_food.clone(),
        days: schedule,
    })
}

/// [`calculate_transition`] over a standard duration
///
/// # Errors
///
/// Returns `InvalidInput` if the portion is negative or not finite
pub fn calculate_standard_transition(
    current_food: &FoodRecord,
    new_food: &FoodRecord,
    current_portion_cups: f64,
    duration: TransitionDuration,
) -> AppResult<TransitionPlan> {
    calculate_transition(current_food, new_food, current_portion_cups, duration.days())
}
