// ABOUTME: Tests for feeding, grading, and catalog configuration loading and validation
// ABOUTME: Environment override tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use petfeed::config::{CatalogConfig, ConfigError, PetFeedConfig};
use petfeed::errors::{AppError, ErrorCode};
use petfeed::external::{FoodCatalogSource, HttpCatalogClient};
use serial_test::serial;
use std::env;

const ENV_KEYS: [&str; 6] = [
    "PETFEED_MER_FALLBACK",
    "PETFEED_GRAMS_PER_CUP",
    "PETFEED_GRAM_ROUNDING_STEP",
    "PETFEED_CATALOG_BASE_URL",
    "PETFEED_CATALOG_TIMEOUT_SECS",
    "PETFEED_SEARCH_MIN_LENGTH",
];

/// Clears every `PETFEED_*` variable on creation and on drop
struct EnvGuard;

impl EnvGuard {
    fn new() -> Self {
        Self::clear();
        Self
    }

    fn clear() {
        for key in ENV_KEYS {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        Self::clear();
    }
}

#[test]
fn test_defaults_are_valid() {
    let config = PetFeedConfig::default();
    config.validate().unwrap();

    assert_eq!(config.grading.categories.weight_sum(), 100);
    assert!((config.feeding.mer.fallback - 1.6).abs() < f64::EPSILON);
    assert!((config.feeding.portions.grams_per_cup - 240.0).abs() < f64::EPSILON);
    assert!((config.feeding.portions.gram_rounding_step - 5.0).abs() < f64::EPSILON);
    assert_eq!(config.catalog.min_search_length, 2);
}

#[test]
fn test_category_order_and_weights() {
    let config = PetFeedConfig::default();
    let table: Vec<(&str, u8)> = config
        .grading
        .categories
        .in_order()
        .iter()
        .map(|(name, rule)| (*name, rule.weight))
        .collect();

    assert_eq!(
        table,
        [
            ("AAFCO Compliance", 25),
            ("Protein Quality", 25),
            ("Ingredient Quality", 20),
            ("Nutritional Balance", 15),
            ("Safety Flags", 15),
        ]
    );
}

#[test]
fn test_validate_rejects_bad_weights() {
    let mut config = PetFeedConfig::default();
    config.grading.categories.safety_flags.weight = 20;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_validate_rejects_overlapping_bands() {
    let mut config = PetFeedConfig::default();
    config.grading.bands.b_min = config.grading.bands.a_min;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_validate_rejects_non_positive_constants() {
    let mut config = PetFeedConfig::default();
    config.feeding.portions.grams_per_cup = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = PetFeedConfig::default();
    config.feeding.mer.dog_adult_neutered[1] = -1.0;
    assert!(config.validate().is_err());

    let mut config = PetFeedConfig::default();
    config.catalog.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let err: AppError = ConfigError::InvalidRange("bad").into();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("bad"));
}

#[test]
#[serial]
fn test_load_without_env_uses_defaults() {
    let _guard = EnvGuard::new();
    let config = PetFeedConfig::load().unwrap();
    assert_eq!(config.catalog.base_url, CatalogConfig::default().base_url);
}

#[test]
#[serial]
fn test_env_overrides() {
    let _guard = EnvGuard::new();
    env::set_var("PETFEED_MER_FALLBACK", "1.3");
    env::set_var("PETFEED_GRAMS_PER_CUP", " 230 ");
    env::set_var("PETFEED_CATALOG_BASE_URL", "https://catalog.example.com/api");
    env::set_var("PETFEED_CATALOG_TIMEOUT_SECS", "30");
    env::set_var("PETFEED_SEARCH_MIN_LENGTH", "3");

    let config = PetFeedConfig::load().unwrap();

    assert!((config.feeding.mer.fallback - 1.3).abs() < f64::EPSILON);
    assert!((config.feeding.portions.grams_per_cup - 230.0).abs() < f64::EPSILON);
    assert_eq!(config.catalog.base_url, "https://catalog.example.com/api");
    assert_eq!(config.catalog.timeout_secs, 30);
    assert_eq!(config.catalog.min_search_length, 3);
}

#[test]
#[serial]
fn test_unparseable_env_value_fails_load() {
    let _guard = EnvGuard::new();
    env::set_var("PETFEED_GRAM_ROUNDING_STEP", "five");
    assert!(matches!(PetFeedConfig::load(), Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_invalid_env_value_fails_validation() {
    let _guard = EnvGuard::new();
    env::set_var("PETFEED_CATALOG_BASE_URL", "not a url");
    assert!(PetFeedConfig::load().is_err());

    env::set_var("PETFEED_CATALOG_BASE_URL", "http://localhost:9000");
    env::set_var("PETFEED_MER_FALLBACK", "0");
    assert!(matches!(
        PetFeedConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
#[serial]
fn test_unparseable_catalog_env_value_fails_load() {
    let _guard = EnvGuard::new();
    env::set_var("PETFEED_CATALOG_TIMEOUT_SECS", "soon");
    assert!(matches!(PetFeedConfig::load(), Err(ConfigError::Parse(_))));

    env::set_var("PETFEED_CATALOG_TIMEOUT_SECS", "20");
    let config = PetFeedConfig::load().unwrap();
    assert_eq!(config.catalog.timeout(), std::time::Duration::from_secs(20));
}

// Only test in this binary that touches the global; it is initialized once
#[tokio::test]
#[serial]
async fn test_global_config_loads_once_and_drives_catalog_client() {
    let _guard = EnvGuard::new();
    env::set_var("PETFEED_SEARCH_MIN_LENGTH", "4");

    let global = PetFeedConfig::global();
    assert_eq!(global.catalog.min_search_length, 4);

    env::remove_var("PETFEED_SEARCH_MIN_LENGTH");
    assert!(std::ptr::eq(global, PetFeedConfig::global()));

    // Three characters pass the default limit but not the global one
    let client = HttpCatalogClient::from_global_config().unwrap();
    let err = client.search_foods("abc", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
