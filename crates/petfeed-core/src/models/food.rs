// ABOUTME: Food catalog record model
// ABOUTME: Flat JSON shape consumed from the catalog API, custom entries, and mocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::pet::Species;
use serde::{Deserialize, Serialize};

/// Where a food record came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoodSource {
    /// Remote catalog API
    #[default]
    Api,
    /// Entered by a user
    Custom,
    /// Test fixture
    Mock,
}

/// Catalog entry, keyed by a stable code (barcode or synthetic id)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    /// Barcode or synthetic identifier
    pub code: String,
    /// Brand name
    pub brand: String,
    /// Product name
    pub product_name: String,
    /// Species the food is formulated for
    pub species: Species,
    /// Free-text life stage statement ("adult", "all life stages", ...)
    #[serde(default)]
    pub lifestage: String,
    /// Metabolizable energy per standard cup
    #[serde(default)]
    pub kcal_per_cup: f64,
    /// Metabolizable energy per kilogram
    #[serde(default)]
    pub kcal_per_kg: f64,
    /// Metabolizable energy per 100 g, when the label states it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kcal_per_100g: Option<f64>,
    /// Guaranteed analysis: crude protein (min %)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_percent: Option<f64>,
    /// Guaranteed analysis: crude fat (min %)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_percent: Option<f64>,
    /// Guaranteed analysis: crude fiber (max %)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_percent: Option<f64>,
    /// Guaranteed analysis: moisture (max %)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moisture_percent: Option<f64>,
    /// Comma-separated ingredient list, in label order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    /// Product photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Provenance tag
    #[serde(default)]
    pub source: FoodSource,
}

impl FoodRecord {
    /// Both caloric densities are present and positive
    #[must_use]
    pub fn has_caloric_data(&self) -> bool {
        self.kcal_per_cup > 0.0 && self.kcal_per_kg > 0.0
    }

    /// Ingredient list split on commas, trimmed, empty entries dropped
    #[must_use]
    pub fn ingredient_list(&self) -> Vec<&str> {
        self.ingredients
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
