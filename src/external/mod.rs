// ABOUTME: External API client modules (pet food catalog)
// ABOUTME: Catalog source trait with HTTP and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! Clients for the remote services petfeed reads from.

pub mod catalog_client;

// Re-export commonly used types
pub use catalog_client::{
    validate_search_term, FoodCatalogSource, HttpCatalogClient, MockCatalogClient,
};
