// ABOUTME: Pet energy requirement and portion calculations (RER, MER, cups and grams)
// ABOUTME: Converts a pet profile into daily/per-meal kcal and portions of a specific food
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy & Portion Calculator
//!
//! Implements the standard veterinary maintenance energy model:
//!
//! - **RER** (Resting Energy Requirement) = 70 x kg^0.75 kcal/day
//! - **MER** (Maintenance Energy Requirement) = RER x life stage / activity multiplier
//!
//! Only the final kcal values are rounded (half up); RER and MER keep full
//! precision. Portions are derived from the food's kcal per cup, with grams at
//! a fixed dry-food density.
//!
//! # References
//!
//! - National Research Council (2006). *Nutrient Requirements of Dogs and Cats*.
//! - WSAVA Global Nutrition Committee, feeding guidelines for dogs and cats.

use super::rounding::{round_kcal, round_to_measurable_cups, round_to_nearest};
use crate::config::{FeedingConfig, MerConfig, PortionConfig};
use petfeed_core::constants::energy::{RER_COEFFICIENT, RER_EXPONENT};
use petfeed_core::errors::{AppError, AppResult};
use petfeed_core::models::{FoodRecord, LifeStage, PetProfile, ReproductiveStatus, Species};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily energy needs for one pet profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResult {
    /// Resting Energy Requirement (kcal/day, unrounded)
    pub rer: f64,
    /// MER multiplier applied to RER
    pub mer_multiplier: f64,
    /// Maintenance Energy Requirement (kcal/day, unrounded)
    pub mer: f64,
    /// MER rounded to whole kcal
    pub daily_kcal: u32,
    /// `daily_kcal` split across meals, rounded
    pub per_meal_kcal: u32,
    /// Meals per day from the feeding frequency
    pub meals_per_day: u8,
}

/// Portions of a specific food
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortionResult {
    /// Cups per day
    pub cups_per_day: f64,
    /// Cups per meal
    pub cups_per_meal: f64,
    /// Measurable label for the daily amount
    pub cups_per_day_label: String,
    /// Measurable label for one meal
    pub cups_per_meal_label: String,
    /// Grams per day
    pub grams_per_day: f64,
    /// Grams per meal
    pub grams_per_meal: f64,
    /// Grams per meal snapped to the rounding step (5 g by default)
    pub grams_per_meal_rounded: f64,
}

/// Calculate Resting Energy Requirement
///
/// Formula: RER = 70 x `weight_kg`^0.75
///
/// Convert pounds first with [`petfeed_core::models::lb_to_kg`].
///
/// # Errors
///
/// Returns `InvalidInput` if the weight is not a positive finite number
pub fn calculate_rer(weight_kg: f64) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be a positive number of kilograms, got {weight_kg}"
        )));
    }

    Ok(RER_COEFFICIENT * weight_kg.powf(RER_EXPONENT))
}

/// Look up the MER multiplier for a profile
///
/// Precedence:
/// 1. Dog puppy / cat kitten: fixed growth multiplier (activity and status ignored)
/// 2. Senior: by reproductive status only
/// 3. Adult: reproductive status x activity level matrix
/// 4. Anything else (e.g. cat puppy, very active cat): `config.fallback`
///
/// The fallback is a permissive default rather than a validation failure.
#[must_use]
pub fn mer_multiplier(profile: &PetProfile, config: &MerConfig) -> f64 {
    let neutered = profile.reproductive_status == ReproductiveStatus::Neutered;
    let activity = profile.activity_level.index();

    let matched = match (profile.species, profile.life_stage) {
        (Species::Dog, LifeStage::Puppy) => Some(config.dog_puppy),
        (Species::Cat, LifeStage::Kitten) => Some(config.cat_kitten),
        (Species::Dog, LifeStage::Senior) => Some(if neutered {
            config.dog_senior_neutered
        } else {
            config.dog_senior_intact
        }),
        (Species::Cat, LifeStage::Senior) => Some(if neutered {
            config.cat_senior_neutered
        } else {
            config.cat_senior_intact
        }),
        (Species::Dog, LifeStage::Adult) => if neutered {
            config.dog_adult_neutered.get(activity)
        } else {
            config.dog_adult_intact.get(activity)
        }
        .copied(),
        (Species::Cat, LifeStage::Adult) => if neutered {
            config.cat_adult_neutered.get(activity)
        } else {
            config.cat_adult_intact.get(activity)
        }
        .copied(),
        (Species::Dog, LifeStage::Kitten) | (Species::Cat, LifeStage::Puppy) => None,
    };

    matched.unwrap_or_else(|| {
        debug!(
            species = %profile.species,
            life_stage = %profile.life_stage,
            activity = ?profile.activity_level,
            fallback = config.fallback,
            "Profile outside MER table, using fallback multiplier"
        );
        config.fallback
    })
}

/// Calculate daily and per-meal energy needs for a profile
///
/// # Errors
///
/// Returns `InvalidInput` if the target weight is not positive
pub fn calculate_feeding(profile: &PetProfile, config: &FeedingConfig) -> AppResult<EnergyResult> {
    let rer = calculate_rer(profile.weight_kg())?;
    let multiplier = mer_multiplier(profile, &config.mer);
    let mer = rer * multiplier;
    let daily_kcal = round_kcal(mer);
    let meals_per_day = profile.feeding_frequency.meals_per_day();
    let per_meal_kcal = round_kcal(f64::from(daily_kcal) / f64::from(meals_per_day));

    Ok(EnergyResult {
        rer,
        mer_multiplier: multiplier,
        mer,
        daily_kcal,
        per_meal_kcal,
        meals_per_day,
    })
}

/// Convert a daily kcal target into cups and grams of a food
///
/// # Errors
///
/// Returns `InvalidInput` if `kcal_per_cup` is not positive or `meals_per_day` is zero
pub fn calculate_portions(
    daily_kcal: u32,
    meals_per_day: u8,
    kcal_per_cup: f64,
    config: &PortionConfig,
) -> AppResult<PortionResult> {
    if !kcal_per_cup.is_finite() || kcal_per_cup <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "kcal per cup must be positive, got {kcal_per_cup}"
        )));
    }
    if meals_per_day == 0 {
        return Err(AppError::invalid_input("Meals per day must be at least 1"));
    }

    let cups_per_day = f64::from(daily_kcal) / kcal_per_cup;
    let cups_per_meal = cups_per_day / f64::from(meals_per_day);
    let grams_per_day = cups_per_day * config.grams_per_cup;
    let grams_per_meal = cups_per_meal * config.grams_per_cup;

    Ok(PortionResult {
        cups_per_day,
        cups_per_meal,
        cups_per_day_label: round_to_measurable_cups(cups_per_day),
        cups_per_meal_label: round_to_measurable_cups(cups_per_meal),
        grams_per_day,
        grams_per_meal,
        grams_per_meal_rounded: round_to_nearest(grams_per_meal, config.gram_rounding_step),
    })
}

/// Portions of `food` for an already computed energy result
///
/// # Errors
///
/// Returns `InvalidInput` if the food has no usable kcal per cup
pub fn calculate_portions_for_food(
    energy: &EnergyResult,
    food: &FoodRecord,
    config: &PortionConfig,
) -> AppResult<PortionResult> {
    calculate_portions(
        energy.daily_kcal,
        energy.meals_per_day,
        food.kcal_per_cup,
        config,
    )
    .map_err(|e| e.with_details(serde_json::json!({ "food_code": food.code })))
}
