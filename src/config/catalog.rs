// ABOUTME: Food catalog client configuration types
// ABOUTME: Base URL, request timeout, and search term limits; loaded through PetFeedConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::feeding_config::ConfigError;
use petfeed_core::constants::catalog;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Catalog API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API (the `/foods` routes hang off it)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Shortest accepted search term
    pub min_search_length: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: catalog::DEFAULT_CATALOG_BASE_URL.to_owned(),
            timeout_secs: catalog::DEFAULT_CATALOG_TIMEOUT_SECS,
            min_search_length: catalog::MIN_SEARCH_TERM_LENGTH,
        }
    }
}

impl CatalogConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the catalog settings
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL or the timeout is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Parse(format!("Invalid catalog base URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidRange(
                "catalog base URL must use http or https",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "catalog timeout must be at least one second",
            ));
        }
        Ok(())
    }
}
