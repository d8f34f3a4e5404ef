// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus pet profile and food record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `petfeed`

use petfeed::models::{
    ActivityLevel, FeedingFrequency, FoodRecord, FoodSource, LifeStage, PetProfile,
    ReproductiveStatus, Species, WeightUnit,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Adult profile in kilograms
pub fn profile(
    species: Species,
    weight_kg: f64,
    life_stage: LifeStage,
    activity_level: ActivityLevel,
    reproductive_status: ReproductiveStatus,
) -> PetProfile {
    PetProfile {
        species,
        target_weight: weight_kg,
        weight_unit: WeightUnit::Kg,
        life_stage,
        activity_level,
        reproductive_status,
        feeding_frequency: FeedingFrequency::Bid,
    }
}

/// 10 kg neutered, moderately active adult dog fed twice a day
pub fn reference_dog() -> PetProfile {
    profile(
        Species::Dog,
        10.0,
        LifeStage::Adult,
        ActivityLevel::Moderate,
        ReproductiveStatus::Neutered,
    )
}

/// Minimal catalog record with caloric data
pub fn food(code: &str, brand: &str, product_name: &str, species: Species) -> FoodRecord {
    FoodRecord {
        code: code.to_owned(),
        brand: brand.to_owned(),
        product_name: product_name.to_owned(),
        species,
        lifestage: "Adult".to_owned(),
        kcal_per_cup: 350.0,
        kcal_per_kg: 3_500.0,
        kcal_per_100g: None,
        protein_percent: None,
        fat_percent: None,
        fiber_percent: None,
        moisture_percent: None,
        ingredients: None,
        image_url: None,
        source: FoodSource::Custom,
    }
}

/// Three-record catalog: two dog foods and one cat food
pub fn small_catalog() -> Vec<FoodRecord> {
    vec![
        food("100", "Acme", "Chicken Kibble", Species::Dog),
        food("200", "Whisker Co", "Chicken Pate", Species::Cat),
        food("300", "Acme", "Lamb & Rice", Species::Dog),
    ]
}
