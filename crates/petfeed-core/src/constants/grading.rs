// ABOUTME: Food grading constants: category weights, heuristic scores, and thresholds
// ABOUTME: Defaults for the weighted letter-grade engine; all overridable via GradingConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Grading constants.
//!
//! Category weights must sum to 100. Concern/positive thresholds are tuned per
//! category and are not derived from the weights.

/// Category weights (percent of overall score)
pub mod weights {
    /// AAFCO nutritional adequacy statement
    pub const AAFCO_COMPLIANCE: u8 = 25;
    /// Protein source and species fit
    pub const PROTEIN_QUALITY: u8 = 25;
    /// Ingredient list quality
    pub const INGREDIENT_QUALITY: u8 = 20;
    /// Caloric data completeness
    pub const NUTRITIONAL_BALANCE: u8 = 15;
    /// Questionable additives
    pub const SAFETY_FLAGS: u8 = 15;
}

/// Heuristic category scores
pub mod scores {
    /// Life stage statement matches the requested stage
    pub const AAFCO_MATCH: u8 = 85;
    /// Life stage statement missing or for another stage
    pub const AAFCO_MISMATCH: u8 = 70;
    /// Food formulated for the requested species
    pub const PROTEIN_SPECIES_MATCH: u8 = 80;
    /// Food formulated for another species
    pub const PROTEIN_SPECIES_MISMATCH: u8 = 70;
    /// First ingredient is a named animal protein
    pub const INGREDIENTS_ANIMAL_FIRST: u8 = 85;
    /// Ingredient list present, first ingredient not an animal protein
    pub const INGREDIENTS_OTHER_FIRST: u8 = 70;
    /// No ingredient list on record
    pub const INGREDIENTS_UNKNOWN: u8 = 65;
    /// Both kcal/cup and kcal/kg are positive
    pub const BALANCE_COMPLETE: u8 = 80;
    /// Caloric data missing
    pub const BALANCE_INCOMPLETE: u8 = 60;
    /// Safety score before additive penalties
    pub const SAFETY_BASE: u8 = 95;
    /// Penalty per flagged additive
    pub const SAFETY_PENALTY_PER_FLAG: u8 = 15;
}

/// Concern / positive thresholds per category
pub mod thresholds {
    /// AAFCO concern when score is below this
    pub const AAFCO_CONCERN_BELOW: u8 = 75;
    /// AAFCO positive when score is at or above this
    pub const AAFCO_POSITIVE_AT: u8 = 85;
    /// Protein concern when score is below this
    pub const PROTEIN_CONCERN_BELOW: u8 = 75;
    /// Protein positive when score is at or above this
    pub const PROTEIN_POSITIVE_AT: u8 = 80;
    /// Ingredient concern when score is below this
    pub const INGREDIENT_CONCERN_BELOW: u8 = 70;
    /// Ingredient positive when score is at or above this
    pub const INGREDIENT_POSITIVE_AT: u8 = 85;
    /// Balance concern when score is below this
    pub const BALANCE_CONCERN_BELOW: u8 = 70;
    /// Balance positive when score is at or above this
    pub const BALANCE_POSITIVE_AT: u8 = 80;
    /// Safety concern when score is below this
    pub const SAFETY_CONCERN_BELOW: u8 = 80;
    /// Safety positive when score is at or above this
    pub const SAFETY_POSITIVE_AT: u8 = 90;
}

/// Inclusive lower bounds of the letter grade bands
pub mod bands {
    /// A grade
    pub const A_MIN: u8 = 90;
    /// B grade
    pub const B_MIN: u8 = 80;
    /// C grade
    pub const C_MIN: u8 = 70;
    /// D grade
    pub const D_MIN: u8 = 60;
}

/// Words that mark an ingredient as a named animal protein
pub const ANIMAL_PROTEIN_KEYWORDS: &[&str] = &[
    "chicken", "beef", "lamb", "turkey", "salmon", "fish", "duck", "venison", "pork", "rabbit",
    "whitefish", "tuna", "trout", "bison", "egg", "meat",
];

/// Additives that lower the safety score
pub const FLAGGED_ADDITIVES: &[&str] = &[
    "bha",
    "bht",
    "ethoxyquin",
    "propylene glycol",
    "red 40",
    "yellow 5",
    "yellow 6",
    "blue 2",
];
