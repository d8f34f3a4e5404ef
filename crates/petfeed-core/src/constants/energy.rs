// ABOUTME: Energy requirement constants for dogs and cats
// ABOUTME: RER coefficients and MER multipliers by species, life stage, and activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Resting and maintenance energy requirement constants.
//!
//! RER = `RER_COEFFICIENT` x kg^`RER_EXPONENT` (kcal/day). MER multipliers
//! follow the common veterinary feeding guidelines for companion animals.

/// RER coefficient (kcal)
pub const RER_COEFFICIENT: f64 = 70.0;

/// RER metabolic body weight exponent
pub const RER_EXPONENT: f64 = 0.75;

/// Multiplier used when a profile falls outside the species/life stage matrix
pub const FALLBACK_MER_MULTIPLIER: f64 = 1.6;

/// Growing dogs, regardless of activity or reproductive status
pub const DOG_PUPPY_MULTIPLIER: f64 = 2.0;

/// Growing cats, regardless of activity or reproductive status
pub const CAT_KITTEN_MULTIPLIER: f64 = 2.5;

/// Adult dog multipliers, indexed sedentary, moderate, active, very active
pub const DOG_ADULT_INTACT: [f64; 4] = [1.4, 1.8, 2.0, 3.0];
/// Adult dog multipliers for neutered animals
pub const DOG_ADULT_NEUTERED: [f64; 4] = [1.2, 1.6, 1.8, 2.5];

/// Adult cat multipliers, indexed sedentary, moderate, active
pub const CAT_ADULT_INTACT: [f64; 3] = [1.2, 1.4, 1.6];
/// Adult cat multipliers for neutered animals
pub const CAT_ADULT_NEUTERED: [f64; 3] = [1.0, 1.2, 1.4];

/// Senior dog, intact
pub const DOG_SENIOR_INTACT: f64 = 1.4;
/// Senior dog, neutered
pub const DOG_SENIOR_NEUTERED: f64 = 1.2;
/// Senior cat, intact
pub const CAT_SENIOR_INTACT: f64 = 1.2;
/// Senior cat, neutered
pub const CAT_SENIOR_NEUTERED: f64 = 1.1;
