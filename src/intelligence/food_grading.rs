// ABOUTME: Weighted letter-grade scoring of commercial pet foods
// ABOUTME: Five heuristic categories, configurable weights, bands, and concern/positive thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Grading Engine
//!
//! Scores a [`FoodRecord`] against the pet it would be fed to. Each category
//! produces an independent 0-100 score; the overall score is the weighted mean
//! rounded half up, mapped onto A-F bands.
//!
//! | Category            | Weight | Heuristic                                          |
//! |---------------------|--------|----------------------------------------------------|
//! | AAFCO Compliance    | 25     | life stage statement covers the requested stage    |
//! | Protein Quality     | 25     | formulated for the requested species               |
//! | Ingredient Quality  | 20     | first ingredient is a named animal protein         |
//! | Nutritional Balance | 15     | kcal per cup and per kg both present               |
//! | Safety Flags        | 15     | questionable preservatives and artificial colors   |
//!
//! Weights and thresholds live in [`GradingConfig`] and are tuned per category.

use super::rounding::round_half_up;
use crate::config::{CategoryRule, GradeBands, GradingConfig};
use crate::logging::AppLogger;
use petfeed_core::constants::grading::{scores, ANIMAL_PROTEIN_KEYWORDS, FLAGGED_ADDITIVES};
use petfeed_core::models::{FoodRecord, LifeStage, Species};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Whole-word, case-insensitive matchers for each flagged additive
static ADDITIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FLAGGED_ADDITIVES
        .iter()
        .filter_map(|additive| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(additive))).ok())
        .collect()
});

const ALL_LIFE_STAGES: &str = "all life stages";
const GROWTH: &str = "growth";

// ============================================================================
// Result Types
// ============================================================================

/// Letter grade, A best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum LetterGrade {
    /// Excellent
    A,
    /// Good
    B,
    /// Acceptable
    C,
    /// Poor
    D,
    /// Failing
    F,
}

impl LetterGrade {
    /// Map a 0-100 score onto the configured bands (inclusive lower bounds)
    #[must_use]
    pub const fn from_score(score: u8, bands: &GradeBands) -> Self {
        if score >= bands.a_min {
            Self::A
        } else if score >= bands.b_min {
            Self::B
        } else if score >= bands.c_min {
            Self::C
        } else if score >= bands.d_min {
            Self::D
        } else {
            Self::F
        }
    }

    /// Single-character form
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Score of one grading category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingCategory {
    /// Display name
    pub name: String,
    /// 0-100
    pub score: u8,
    /// Share of the overall score
    pub weight: u8,
}

/// Complete grading outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    /// Letter grade for `overall_score`
    pub overall_grade: LetterGrade,
    /// Weighted score, 0-100
    pub overall_score: u8,
    /// Per-category scores in display order
    pub categories: Vec<GradingCategory>,
    /// Category scores below their concern threshold
    pub concerns: Vec<String>,
    /// Category scores at or above their positive threshold
    pub positives: Vec<String>,
}

// ============================================================================
// Category Heuristics
// ============================================================================

fn aafco_score(food: &FoodRecord, life_stage: LifeStage) -> u8 {
    let statement = food.lifestage.to_lowercase();
    let covered = statement.contains(ALL_LIFE_STAGES)
        || statement.contains(life_stage.as_str())
        || (life_stage.is_growth() && statement.contains(GROWTH));

    if covered {
        scores::AAFCO_MATCH
    } else {
        scores::AAFCO_MISMATCH
    }
}

fn protein_score(food: &FoodRecord, species: Species) -> u8 {
    if food.species == species {
        scores::PROTEIN_SPECIES_MATCH
    } else {
        scores::PROTEIN_SPECIES_MISMATCH
    }
}

fn is_animal_protein(ingredient: &str) -> bool {
    let lowered = ingredient.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| ANIMAL_PROTEIN_KEYWORDS.contains(&word))
}

fn ingredient_score(food: &FoodRecord) -> u8 {
    match food.ingredient_list().first() {
        None => scores::INGREDIENTS_UNKNOWN,
        Some(first) if is_animal_protein(first) => scores::INGREDIENTS_ANIMAL_FIRST,
        Some(_) => scores::INGREDIENTS_OTHER_FIRST,
    }
}

fn balance_score(food: &FoodRecord) -> u8 {
    if food.has_caloric_data() {
        scores::BALANCE_COMPLETE
    } else {
        scores::BALANCE_INCOMPLETE
    }
}

/// Number of distinct flagged additives named in the ingredient list
#[must_use]
pub fn count_flagged_additives(ingredients: &str) -> usize {
    ADDITIVE_PATTERNS
        .iter()
        .filter(|pattern| pattern.is_match(ingredients))
        .count()
}

fn safety_score(food: &FoodRecord) -> u8 {
    let flagged = food
        .ingredients
        .as_deref()
        .map_or(0, count_flagged_additives);
    let penalty = u8::try_from(flagged)
        .unwrap_or(u8::MAX)
        .saturating_mul(scores::SAFETY_PENALTY_PER_FLAG);
    scores::SAFETY_BASE.saturating_sub(penalty)
}

// ============================================================================
// Grading
// ============================================================================

fn apply_rule(
    rule: &CategoryRule,
    score: u8,
    concerns: &mut Vec<String>,
    positives: &mut Vec<String>,
) {
    if score < rule.concern_below {
        concerns.push(rule.concern.clone());
    }
    if score >= rule.positive_at_or_above {
        positives.push(rule.positive.clone());
    }
}

/// Grade `food` for a pet of `species` at `life_stage`
///
/// Total over its domain: missing fields lower category scores instead of
/// failing.
#[must_use]
pub fn grade_food(
    food: &FoodRecord,
    species: Species,
    life_stage: LifeStage,
    config: &GradingConfig,
) -> GradingResult {
    let category_scores = [
        aafco_score(food, life_stage),
        protein_score(food, species),
        ingredient_score(food),
        balance_score(food),
        safety_score(food),
    ];

    let mut categories = Vec::with_capacity(category_scores.len());
    let mut concerns = Vec::new();
    let mut positives = Vec::new();
    let mut weighted_sum = 0_u32;

    for ((name, rule), score) in config.categories.in_order().into_iter().zip(category_scores) {
        weighted_sum += u32::from(score) * u32::from(rule.weight);
        apply_rule(rule, score, &mut concerns, &mut positives);
        categories.push(GradingCategory {
            name: name.to_owned(),
            score,
            weight: rule.weight,
        });
    }

    let overall_score = round_half_up(f64::from(weighted_sum) / 100.0).clamp(0.0, 100.0) as u8;
    let overall_grade = LetterGrade::from_score(overall_score, &config.bands);

    AppLogger::log_food_graded(&food.code, overall_grade.as_char(), overall_score);

    GradingResult {
        overall_grade,
        overall_score,
        categories,
        concerns,
        positives,
    }
}
