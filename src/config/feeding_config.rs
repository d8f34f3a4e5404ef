// ABOUTME: Feeding, grading, and catalog configuration with environment overrides
// ABOUTME: Validated defaults for MER multipliers, portion constants, and grading rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feeding Configuration Module
//!
//! Type-safe configuration for the energy calculator, the grading engine and
//! the catalog client. Values come from `petfeed_core::constants`, can be
//! overridden through `PETFEED_*` environment variables, and are validated
//! before use.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export PETFEED_MER_FALLBACK=1.6
//!    export PETFEED_GRAMS_PER_CUP=240
//!    export PETFEED_CATALOG_BASE_URL=https://catalog.example.com/api
//!    ```
//!
//! 2. Default values (if env vars not set)

use super::catalog::CatalogConfig;
use petfeed_core::constants::{energy, grading, units};
use petfeed_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Related values are inconsistent with each other
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable or URL could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Grading weights do not sum to 100
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// A single value is outside its accepted range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(petfeed_core::errors::ErrorCode::ConfigInvalid, error.to_string())
    }
}

/// MER multiplier tables
///
/// Adult tables are indexed by [`ActivityLevel::index`](petfeed_core::models::ActivityLevel::index).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerConfig {
    /// Used for any profile outside the tables below
    pub fallback: f64,
    /// Dog, puppy
    pub dog_puppy: f64,
    /// Cat, kitten
    pub cat_kitten: f64,
    /// Dog, adult, intact: sedentary, moderate, active, very active
    pub dog_adult_intact: [f64; 4],
    /// Dog, adult, neutered
    pub dog_adult_neutered: [f64; 4],
    /// Cat, adult, intact: sedentary, moderate, active
    pub cat_adult_intact: [f64; 3],
    /// Cat, adult, neutered
    pub cat_adult_neutered: [f64; 3],
    /// Dog, senior, intact
    pub dog_senior_intact: f64,
    /// Dog, senior, neutered
    pub dog_senior_neutered: f64,
    /// Cat, senior, intact
    pub cat_senior_intact: f64,
    /// Cat, senior, neutered
    pub cat_senior_neutered: f64,
}

impl Default for MerConfig {
    fn default() -> Self {
        Self {
            fallback: energy::FALLBACK_MER_MULTIPLIER,
            dog_puppy: energy::DOG_PUPPY_MULTIPLIER,
            cat_kitten: energy::CAT_KITTEN_MULTIPLIER,
            dog_adult_intact: energy::DOG_ADULT_INTACT,
            dog_adult_neutered: energy::DOG_ADULT_NEUTERED,
            cat_adult_intact: energy::CAT_ADULT_INTACT,
            cat_adult_neutered: energy::CAT_ADULT_NEUTERED,
            dog_senior_intact: energy::DOG_SENIOR_INTACT,
            dog_senior_neutered: energy::DOG_SENIOR_NEUTERED,
            cat_senior_intact: energy::CAT_SENIOR_INTACT,
            cat_senior_neutered: energy::CAT_SENIOR_NEUTERED,
        }
    }
}

impl MerConfig {
    fn all_multipliers(&self) -> impl Iterator<Item = f64> + '_ {
        [
            self.fallback,
            self.dog_puppy,
            self.cat_kitten,
            self.dog_senior_intact,
            self.dog_senior_neutered,
            self.cat_senior_intact,
            self.cat_senior_neutered,
        ]
        .into_iter()
        .chain(self.dog_adult_intact)
        .chain(self.dog_adult_neutered)
        .chain(self.cat_adult_intact)
        .chain(self.cat_adult_neutered)
    }
}

/// Portion conversion constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionConfig {
    /// Dry food density (g per cup): 240
    pub grams_per_cup: f64,
    /// Per-meal gram amounts snap to this step: 5
    pub gram_rounding_step: f64,
}

impl Default for PortionConfig {
    fn default() -> Self {
        Self {
            grams_per_cup: units::GRAMS_PER_CUP,
            gram_rounding_step: units::GRAM_ROUNDING_STEP,
        }
    }
}

/// Energy calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedingConfig {
    /// MER multiplier tables
    pub mer: MerConfig,
    /// Cup/gram conversion
    pub portions: PortionConfig,
}

/// Weight and concern/positive rules for one grading category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Share of the overall score (all weights sum to 100)
    pub weight: u8,
    /// Emit `concern` when the score is below this
    pub concern_below: u8,
    /// Emit `positive` when the score is at or above this
    pub positive_at_or_above: u8,
    /// Concern text
    pub concern: String,
    /// Positive text
    pub positive: String,
}

impl CategoryRule {
    fn new(
        weight: u8,
        concern_below: u8,
        positive_at_or_above: u8,
        concern: &str,
        positive: &str,
    ) -> Self {
        Self {
            weight,
            concern_below,
            positive_at_or_above,
            concern: concern.to_owned(),
            positive: positive.to_owned(),
        }
    }
}

/// Rules for the fixed grading category set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingCategories {
    /// AAFCO Compliance
    pub aafco_compliance: CategoryRule,
    /// Protein Quality
    pub protein_quality: CategoryRule,
    /// Ingredient Quality
    pub ingredient_quality: CategoryRule,
    /// Nutritional Balance
    pub nutritional_balance: CategoryRule,
    /// Safety Flags
    pub safety_flags: CategoryRule,
}

impl Default for GradingCategories {
    fn default() -> Self {
        use grading::{thresholds as t, weights as w};
        Self {
            aafco_compliance: CategoryRule::new(
                w::AAFCO_COMPLIANCE,
                t::AAFCO_CONCERN_BELOW,
                t::AAFCO_POSITIVE_AT,
                "No AAFCO adequacy statement for this life stage",
                "Formulated for this life stage",
            ),
            protein_quality: CategoryRule::new(
                w::PROTEIN_QUALITY,
                t::PROTEIN_CONCERN_BELOW,
                t::PROTEIN_POSITIVE_AT,
                "Not formulated for this species",
                "Formulated for this species",
            ),
            ingredient_quality: CategoryRule::new(
                w::INGREDIENT_QUALITY,
                t::INGREDIENT_CONCERN_BELOW,
                t::INGREDIENT_POSITIVE_AT,
                "Ingredient list missing or not led by an animal protein",
                "Named animal protein is the first ingredient",
            ),
            nutritional_balance: CategoryRule::new(
                w::NUTRITIONAL_BALANCE,
                t::BALANCE_CONCERN_BELOW,
                t::BALANCE_POSITIVE_AT,
                "Incomplete caloric information",
                "Complete caloric information",
            ),
            safety_flags: CategoryRule::new(
                w::SAFETY_FLAGS,
                t::SAFETY_CONCERN_BELOW,
                t::SAFETY_POSITIVE_AT,
                "Contains questionable preservatives or artificial colors",
                "No questionable additives detected",
            ),
        }
    }
}

impl GradingCategories {
    /// Rules in display order
    #[must_use]
    pub fn in_order(&self) -> [(&'static str, &CategoryRule); 5] {
        [
            ("AAFCO Compliance", &self.aafco_compliance),
            ("Protein Quality", &self.protein_quality),
            ("Ingredient Quality", &self.ingredient_quality),
            ("Nutritional Balance", &self.nutritional_balance),
            ("Safety Flags", &self.safety_flags),
        ]
    }

    /// Sum of all category weights
    #[must_use]
    pub fn weight_sum(&self) -> u32 {
        self.in_order()
            .iter()
            .map(|(_, rule)| u32::from(rule.weight))
            .sum()
    }
}

/// Inclusive lower bounds of the letter grades
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeBands {
    /// A
    pub a_min: u8,
    /// B
    pub b_min: u8,
    /// C
    pub c_min: u8,
    /// D
    pub d_min: u8,
}

impl Default for GradeBands {
    fn default() -> Self {
        Self {
            a_min: grading::bands::A_MIN,
            b_min: grading::bands::B_MIN,
            c_min: grading::bands::C_MIN,
            d_min: grading::bands::D_MIN,
        }
    }
}

/// Grading engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Per-category weights and thresholds
    pub categories: GradingCategories,
    /// Letter grade bands
    pub bands: GradeBands,
}

/// Complete configuration for the library
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PetFeedConfig {
    /// Energy and portion calculator
    pub feeding: FeedingConfig,
    /// Food grading engine
    pub grading: GradingConfig,
    /// Catalog client
    pub catalog: CatalogConfig,
}

/// Global configuration singleton
static PETFEED_CONFIG: OnceLock<PetFeedConfig> = OnceLock::new();

impl PetFeedConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PETFEED_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load petfeed config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PETFEED_*` environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_parse("PETFEED_MER_FALLBACK")? {
            self.feeding.mer.fallback = val;
        }
        if let Some(val) = env_parse("PETFEED_GRAMS_PER_CUP")? {
            self.feeding.portions.grams_per_cup = val;
        }
        if let Some(val) = env_parse("PETFEED_GRAM_ROUNDING_STEP")? {
            self.feeding.portions.gram_rounding_step = val;
        }
        if let Ok(val) = std::env::var("PETFEED_CATALOG_BASE_URL") {
            self.catalog.base_url = val;
        }
        if let Some(val) = env_parse("PETFEED_CATALOG_TIMEOUT_SECS")? {
            self.catalog.timeout_secs = val;
        }
        if let Some(val) = env_parse("PETFEED_SEARCH_MIN_LENGTH")? {
            self.catalog.min_search_length = val;
        }
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .feeding
            .mer
            .all_multipliers()
            .any(|m| !m.is_finite() || m <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "MER multipliers must be positive",
            ));
        }

        let portions = &self.feeding.portions;
        if !portions.grams_per_cup.is_finite() || portions.grams_per_cup <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("grams_per_cup must be positive"));
        }
        if !portions.gram_rounding_step.is_finite() || portions.gram_rounding_step <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "gram_rounding_step must be positive",
            ));
        }

        let weight_sum = self.grading.categories.weight_sum();
        if weight_sum != 100 {
            return Err(ConfigError::InvalidWeights(format!(
                "grading category weights must sum to 100, got {weight_sum}"
            )));
        }

        let bands = &self.grading.bands;
        if !(bands.a_min > bands.b_min && bands.b_min > bands.c_min && bands.c_min > bands.d_min)
            || bands.a_min > 100
        {
            return Err(ConfigError::InvalidRange(
                "grade bands must be strictly descending A > B > C > D and at most 100",
            ));
        }

        for (_, rule) in self.grading.categories.in_order() {
            if rule.concern_below > rule.positive_at_or_above {
                return Err(ConfigError::InvalidRange(
                    "concern threshold must not exceed positive threshold",
                ));
            }
        }

        self.catalog.validate()
    }
}

/// Parse an optional environment variable
fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}: {val}"))),
        Err(_) => Ok(None),
    }
}
