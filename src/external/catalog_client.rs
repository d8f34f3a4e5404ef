// ABOUTME: Pet food catalog API client: full listing, search, and barcode lookup
// ABOUTME: HTTP implementation over reqwest plus an in-memory mock for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Catalog API Client
//!
//! The catalog exposes three read-only routes under a configurable base URL:
//!
//! - `GET {base}/foods` returns the complete catalog as a flat JSON array
//! - `GET {base}/foods/search?q=<term>&species=<dog|cat>` returns ranked matches
//! - `GET {base}/foods/{barcode}` returns one record, or 404
//!
//! Result ranking belongs to the remote service and is passed through as is.
//!
//! # Example
//! ```rust,no_run
//! use petfeed::config::CatalogConfig;
//! use petfeed::external::{FoodCatalogSource, HttpCatalogClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpCatalogClient::new(CatalogConfig::default())?;
//! let matches = client.search_foods("salmon", None).await?;
//! # Ok(())
//! # }
//! ```

use crate::config::{CatalogConfig, PetFeedConfig};
use async_trait::async_trait;
use petfeed_core::constants::catalog::{CATALOG_SERVICE_NAME, MIN_SEARCH_TERM_LENGTH};
use petfeed_core::errors::{AppError, AppResult};
use petfeed_core::models::{FoodRecord, FoodSource, Species};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

/// Read access to a food catalog
#[async_trait]
pub trait FoodCatalogSource: Send + Sync {
    /// Every record in the catalog, in catalog order
    async fn fetch_all_foods(&self) -> AppResult<Vec<FoodRecord>>;

    /// Remote search; `term` must have at least the configured number of characters after trimming
    async fn search_foods(&self, term: &str, species: Option<Species>)
        -> AppResult<Vec<FoodRecord>>;

    /// Lookup by barcode. `Ok(None)` when unknown or when the record has no usable caloric data
    async fn get_food_by_barcode(&self, barcode: &str) -> AppResult<Option<FoodRecord>>;
}

/// Trim and length-check a search term
///
/// # Errors
///
/// Returns `InvalidInput` if the trimmed term is shorter than `min_length` characters
pub fn validate_search_term(term: &str, min_length: usize) -> AppResult<&str> {
    let trimmed = term.trim();
    if trimmed.chars().count() < min_length {
        return Err(AppError::invalid_input(format!(
            "Search term must be at least {min_length} characters"
        )));
    }
    Ok(trimmed)
}

fn validate_barcode(barcode: &str) -> AppResult<&str> {
    let trimmed = barcode.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("Barcode cannot be empty"));
    }
    Ok(trimmed)
}

// ============================================================================
// HTTP client
// ============================================================================

/// reqwest-backed catalog client
pub struct HttpCatalogClient {
    base_url: Url,
    min_search_length: usize,
    http_client: reqwest::Client,
}

impl HttpCatalogClient {
    /// Create a client for `config.base_url` with the configured request timeout
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration fails validation, or
    /// `InternalError` if the HTTP client cannot be built
    pub fn new(config: CatalogConfig) -> AppResult<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppError::config(format!("Invalid catalog base URL: {e}")))?;
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            min_search_length: config.min_search_length,
            http_client,
        })
    }

    /// Create a client from the process-wide [`PetFeedConfig::global`] settings
    ///
    /// # Errors
    ///
    /// Same as [`HttpCatalogClient::new`]
    pub fn from_global_config() -> AppResult<Self> {
        Self::new(PetFeedConfig::global().catalog.clone())
    }

    /// Base URL with `segments` appended (each segment is percent-encoded)
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::config("Catalog base URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn error_for_status(response: reqwest::Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AppError::external_service(CATALOG_SERVICE_NAME, format!("HTTP {status}: {body}"))
    }

    async fn get_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> AppResult<T> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl FoodCatalogSource for HttpCatalogClient {
    async fn fetch_all_foods(&self) -> AppResult<Vec<FoodRecord>> {
        let url = self.endpoint(&["foods"])?;
        debug!(url = %url, "Fetching full food catalog");
        self.get_json(self.http_client.get(url)).await
    }

    async fn search_foods(
        &self,
        term: &str,
        species: Option<Species>,
    ) -> AppResult<Vec<FoodRecord>> {
        let term = validate_search_term(term, self.min_search_length)?;
        let url = self.endpoint(&["foods", "search"])?;

        let mut request = self.http_client.get(url).query(&[("q", term)]);
        if let Some(species) = species {
            request = request.query(&[("species", species.as_str())]);
        }

        debug!(term = %term, species = ?species, "Searching food catalog");
        self.get_json(request).await
    }

    async fn get_food_by_barcode(&self, barcode: &str) -> AppResult<Option<FoodRecord>> {
        let barcode = validate_barcode(barcode)?;
        let url = self.endpoint(&["foods", barcode])?;

        let response = self.http_client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(barcode = %barcode, "Barcode not in catalog");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let food: FoodRecord = response.json().await?;
        Ok(food.has_caloric_data().then_some(food))
    }
}

// ============================================================================
// Mock client
// ============================================================================

/// In-memory catalog for tests (no network)
///
/// Records are tagged [`FoodSource::Mock`]. Full fetches are counted and can
/// be delayed or made to fail.
pub struct MockCatalogClient {
    foods: Vec<FoodRecord>,
    fetch_count: AtomicUsize,
    fail_fetches: AtomicBool,
    fetch_delay: Duration,
}

impl MockCatalogClient {
    /// Mock serving `foods` in the given order
    #[must_use]
    pub fn new(foods: Vec<FoodRecord>) -> Self {
        let foods = foods
            .into_iter()
            .map(|mut food| {
                food.source = FoodSource::Mock;
                food
            })
            .collect();

        Self {
            foods,
            fetch_count: AtomicUsize::new(0),
            fail_fetches: AtomicBool::new(false),
            fetch_delay: Duration::ZERO,
        }
    }

    /// Sleep for `delay` inside every full fetch
    #[must_use]
    pub const fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Make subsequent full fetches fail with an upstream error
    pub fn set_failing(&self, failing: bool) {
        self.fail_fetches.store(failing, Ordering::SeqCst);
    }

    /// Number of `fetch_all_foods` calls so far
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// A small dog and cat catalog
    #[must_use]
    pub fn sample_foods() -> Vec<FoodRecord> {
        vec![
            sample_food(
                "0001",
                "Summit Trail",
                "Adult Chicken & Brown Rice",
                Species::Dog,
                "Adult maintenance",
                350.0,
                3_600.0,
                "Deboned chicken, chicken meal, brown rice, oatmeal, fish oil",
            ),
            sample_food(
                "0002",
                "Summit Trail",
                "Puppy Lamb Recipe",
                Species::Dog,
                "Growth",
                390.0,
                3_900.0,
                "Lamb, lamb meal, barley, peas, salmon oil",
            ),
            sample_food(
                "0003",
                "Harbor Cat",
                "Indoor Salmon Formula",
                Species::Cat,
                "All life stages",
                410.0,
                3_800.0,
                "Salmon, turkey meal, rice, pea protein, taurine",
            ),
            sample_food(
                "0004",
                "Budget Bowl",
                "Original Kibble",
                Species::Dog,
                "Adult",
                330.0,
                3_300.0,
                "Ground corn, meat and bone meal, animal fat (preserved with BHA), red 40, yellow 5",
            ),
        ]
    }

    async fn simulate_fetch(&self) -> AppResult<()> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(AppError::external_unavailable(
                CATALOG_SERVICE_NAME,
                "mock catalog is failing",
            ));
        }
        Ok(())
    }
}

impl Default for MockCatalogClient {
    fn default() -> Self {
        Self::new(Self::sample_foods())
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_food(
    code: &str,
    brand: &str,
    product_name: &str,
    species: Species,
    lifestage: &str,
    kcal_per_cup: f64,
    kcal_per_kg: f64,
    ingredients: &str,
) -> FoodRecord {
    FoodRecord {
        code: code.to_owned(),
        brand: brand.to_owned(),
        product_name: product_name.to_owned(),
        species,
        lifestage: lifestage.to_owned(),
        kcal_per_cup,
        kcal_per_kg,
        kcal_per_100g: Some(kcal_per_kg / 10.0),
        protein_percent: None,
        fat_percent: None,
        fiber_percent: None,
        moisture_percent: None,
        ingredients: Some(ingredients.to_owned()),
        image_url: None,
        source: FoodSource::Mock,
    }
}

#[async_trait]
impl FoodCatalogSource for MockCatalogClient {
    async fn fetch_all_foods(&self) -> AppResult<Vec<FoodRecord>> {
        self.simulate_fetch().await?;
        Ok(self.foods.clone())
    }

    async fn search_foods(
        &self,
        term: &str,
        species: Option<Species>,
    ) -> AppResult<Vec<FoodRecord>> {
        let term = validate_search_term(term, MIN_SEARCH_TERM_LENGTH)?.to_lowercase();

        Ok(self
            .foods
            .iter()
            .filter(|food| species.is_none_or(|s| food.species == s))
            .filter(|food| {
                food.brand.to_lowercase().contains(&term)
                    || food.product_name.to_lowercase().contains(&term)
            })
            .cloned()
            .collect())
    }

    async fn get_food_by_barcode(&self, barcode: &str) -> AppResult<Option<FoodRecord>> {
        let barcode = validate_barcode(barcode)?;
        Ok(self
            .foods
            .iter()
            .find(|food| food.code == barcode && food.has_caloric_data())
            .cloned())
    }
}
