// ABOUTME: Main library entry point for the petfeed feeding and food grading toolkit
// ABOUTME: Energy/portion calculator, grading engine, transition planner, and catalog cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # petfeed
//!
//! Feeding recommendations for dogs and cats, backed by a cached view of a
//! remote pet food catalog.
//!
//! ## Components
//!
//! - **Energy & portions**: RER/MER daily kcal, split across meals, converted
//!   to measurable cups and grams of a specific food
//! - **Food grading**: weighted A-F scoring of a catalog record for a pet
//! - **Diet transitions**: day-by-day old/new food schedules
//! - **Catalog cache**: single-flight loading and local search of the catalog
//!
//! ## Example Usage
//!
//! ```rust
//! use petfeed::config::FeedingConfig;
//! use petfeed::intelligence::{calculate_feeding, calculate_portions};
//! use petfeed::models::{
//!     ActivityLevel, FeedingFrequency, LifeStage, PetProfile, ReproductiveStatus, Species,
//!     WeightUnit,
//! };
//!
//! # fn main() -> petfeed::errors::AppResult<()> {
//! let profile = PetProfile {
//!     species: Species::Dog,
//!     target_weight: 10.0,
//!     weight_unit: WeightUnit::Kg,
//!     life_stage: LifeStage::Adult,
//!     activity_level: ActivityLevel::Moderate,
//!     reproductive_status: ReproductiveStatus::Neutered,
//!     feeding_frequency: FeedingFrequency::Bid,
//! };
//!
//! let config = FeedingConfig::default();
//! let energy = calculate_feeding(&profile, &config)?;
//! assert_eq!(energy.daily_kcal, 630);
//!
//! let portions = calculate_portions(energy.daily_kcal, energy.meals_per_day, 350.0, &config.portions)?;
//! assert_eq!(portions.cups_per_meal_label, "3/4 cup");
//! # Ok(())
//! # }
//! ```

/// Single-flight food catalog cache
pub mod cache;

/// Configuration: feeding, grading, catalog
pub mod config;

/// Remote catalog clients
pub mod external;

/// Feeding calculations and food grading
pub mod intelligence;

/// Logging setup and structured domain events
pub mod logging;

/// Saved pets and calculation history
pub mod repository;

pub use petfeed_core::{constants, errors, models};
