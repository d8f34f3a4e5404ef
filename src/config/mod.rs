// ABOUTME: Configuration management module for calculator, grading, and catalog settings
// ABOUTME: Environment-driven overrides on top of validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for petfeed
//!
//! - **Feeding**: MER multiplier tables and portion conversion constants
//! - **Grading**: category weights, concern/positive thresholds, grade bands
//! - **Catalog**: catalog API base URL, timeout, and search limits

/// Catalog client configuration
pub mod catalog;
/// Feeding, grading, and combined configuration with env overrides
pub mod feeding_config;

pub use catalog::CatalogConfig;
pub use feeding_config::{
    CategoryRule, ConfigError, FeedingConfig, GradeBands, GradingCategories, GradingConfig,
    MerConfig, PetFeedConfig, PortionConfig,
};
