// ABOUTME: Cache layer for the remote food catalog
// ABOUTME: Single-flight loading and in-memory search over the cached list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Single-flight food catalog cache
pub mod food_catalog;

pub use food_catalog::{CatalogSnapshot, CatalogState, FoodCatalogCache};
