// ABOUTME: Pet profile model and its enumerations
// ABOUTME: Species, life stage, activity, reproductive status, feeding frequency, weight unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::KG_PER_LB;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Animal species supported by the calculators
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Dog
    Dog,
    /// Cat
    Cat,
}

impl Species {
    /// Wire spelling (`dog`, `cat`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Life stage of the animal.
///
/// `Puppy` is only meaningful for dogs and `Kitten` for cats; other pairings
/// are accepted and resolved by the fallback multiplier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LifeStage {
    /// Growing dog
    Puppy,
    /// Growing cat
    Kitten,
    /// Adult maintenance
    Adult,
    /// Senior maintenance
    Senior,
}

impl LifeStage {
    /// Wire spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Puppy => "puppy",
            Self::Kitten => "kitten",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }

    /// Whether this is a growth stage (puppy or kitten)
    #[must_use]
    pub const fn is_growth(self) -> bool {
        matches!(self, Self::Puppy | Self::Kitten)
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level. `VeryActive` only has a multiplier for adult dogs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Mostly resting
    Sedentary,
    /// Daily walks or play
    Moderate,
    /// Regular vigorous exercise
    Active,
    /// Working or sporting dogs
    VeryActive,
}

impl ActivityLevel {
    /// Position in the activity column of the adult multiplier tables
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Sedentary => 0,
            Self::Moderate => 1,
            Self::Active => 2,
            Self::VeryActive => 3,
        }
    }
}

/// Reproductive status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReproductiveStatus {
    /// Not spayed or neutered
    Intact,
    /// Spayed or neutered
    Neutered,
}

/// Meals per day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeedingFrequency {
    /// Once daily
    Sid,
    /// Twice daily
    Bid,
    /// Three times daily
    Tid,
}

impl FeedingFrequency {
    /// Number of meals per day
    #[must_use]
    pub const fn meals_per_day(self) -> u8 {
        match self {
            Self::Sid => 1,
            Self::Bid => 2,
            Self::Tid => 3,
        }
    }
}

/// Unit the target weight was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    Kg,
    /// Pounds
    Lb,
}

/// Convert pounds to kilograms
#[must_use]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

/// Convert kilograms to pounds
#[must_use]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Inputs to the energy calculator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetProfile {
    /// Species
    pub species: Species,
    /// Target body weight, in `weight_unit`
    pub target_weight: f64,
    /// Unit of `target_weight`
    pub weight_unit: WeightUnit,
    /// Life stage
    pub life_stage: LifeStage,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Reproductive status
    pub reproductive_status: ReproductiveStatus,
    /// Meals per day
    pub feeding_frequency: FeedingFrequency,
}

impl PetProfile {
    /// Target weight in kilograms
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        match self.weight_unit {
            WeightUnit::Kg => self.target_weight,
            WeightUnit::Lb => lb_to_kg(self.target_weight),
        }
    }
}
