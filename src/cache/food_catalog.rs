// ABOUTME: Single-flight cache of the full food catalog with in-memory search
// ABOUTME: Concurrent callers share one fetch; failures reset to empty so retries work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Catalog Cache
//!
//! Holds at most one copy of the remote catalog. The cache moves through
//! three states:
//!
//! ```text
//! Empty --get--> Loading --ok--> Loaded
//!   ^               |
//!   +----- err -----+          clear_cache(): any state -> Empty
//! ```
//!
//! While `Loading`, every caller awaits the same in-flight fetch, so exactly
//! one upstream request is made per load cycle. Each load carries a generation
//! number; a load that finishes after [`FoodCatalogCache::clear_cache`] still
//! answers its own callers but never repopulates the cache. The next load
//! waits for such a stale fetch to settle before issuing its own request, so
//! at most one upstream fetch runs at any time.
//!
//! The cache is an ordinary value owned by the caller. Share it with `Arc`.

use crate::external::FoodCatalogSource;
use crate::logging::AppLogger;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use petfeed_core::errors::{AppError, AppResult};
use petfeed_core::models::{FoodRecord, Species};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Weak};
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::debug;

/// Catalog shared between every caller of one load
pub type CatalogSnapshot = Arc<Vec<FoodRecord>>;

type LoadResult = Result<CatalogSnapshot, Arc<AppError>>;
type SharedLoad = Shared<BoxFuture<'static, LoadResult>>;

/// Observable cache state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogState {
    /// Nothing cached, no fetch running
    Empty,
    /// A fetch is in flight
    Loading,
    /// Catalog available
    Loaded,
}

enum CacheSlot {
    Empty,
    Loading { generation: u64, load: SharedLoad },
    Loaded(CatalogSnapshot),
}

struct CacheInner {
    slot: CacheSlot,
    generation: u64,
    /// Load orphaned by `clear_cache` that has not settled yet
    stale: Option<(u64, SharedLoad)>,
}

impl CacheInner {
    fn is_loading(&self, generation: u64) -> bool {
        matches!(self.slot, CacheSlot::Loading { generation: g, .. } if g == generation)
    }

    fn is_stale(&self, generation: u64) -> bool {
        matches!(self.stale, Some((g, _)) if g == generation)
    }
}

/// De-duplicated, cached view of a [`FoodCatalogSource`]
pub struct FoodCatalogCache<S> {
    source: Arc<S>,
    inner: Arc<Mutex<CacheInner>>,
}

impl<S: FoodCatalogSource + 'static> FoodCatalogCache<S> {
    /// Empty cache over `source`
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::from_shared(Arc::new(source))
    }

    /// Empty cache over a source that is also used elsewhere
    #[must_use]
    pub fn from_shared(source: Arc<S>) -> Self {
        Self {
            source,
            inner: Arc::new(Mutex::new(CacheInner {
                slot: CacheSlot::Empty,
                generation: 0,
                stale: None,
            })),
        }
    }

    /// The underlying source
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Full catalog, fetching it on first use
    ///
    /// Concurrent calls while a fetch is in flight wait for that fetch instead
    /// of starting another. All callers of one successful load receive the
    /// same `Arc`.
    ///
    /// # Errors
    ///
    /// Returns the upstream error of the fetch this call waited on. The cache
    /// is left `Empty` so the next call retries.
    pub async fn get_cached_foods(&self) -> AppResult<CatalogSnapshot> {
        let load = {
            let mut inner = self.inner.lock().await;
            match &inner.slot {
                CacheSlot::Loaded(foods) => return Ok(Arc::clone(foods)),
                CacheSlot::Loading { load, .. } => load.clone(),
                CacheSlot::Empty => {
                    inner.generation += 1;
                    let generation = inner.generation;
                    let previous = inner.stale.as_ref().map(|(_, load)| load.clone());
                    let load = self.start_load(generation, previous);
                    inner.slot = CacheSlot::Loading {
                        generation,
                        load: load.clone(),
                    };
                    load
                }
            }
        };

        load.await.map_err(|e| e.detached())
    }

    /// Build the shared fetch for `generation`; it settles the cache state itself
    ///
    /// `previous` is a stale fetch still in flight. It is awaited first and its
    /// outcome ignored.
    fn start_load(&self, generation: u64, previous: Option<SharedLoad>) -> SharedLoad {
        let source = Arc::clone(&self.source);
        let inner: Weak<Mutex<CacheInner>> = Arc::downgrade(&self.inner);

        async move {
            if let Some(previous) = previous {
                debug!(
                    catalog.generation = generation,
                    "Waiting for stale catalog fetch to settle"
                );
                let _ = previous.await;
            }

            AppLogger::log_catalog_fetch_started(generation);
            let started = Instant::now();
            let result = source.fetch_all_foods().await;
            let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            let outcome = match result {
                Ok(foods) => {
                    AppLogger::log_catalog_fetch_completed(generation, foods.len(), duration_ms);
                    Ok(Arc::new(foods))
                }
                Err(e) => {
                    AppLogger::log_catalog_fetch_failed(generation, &e.to_string(), duration_ms);
                    Err(Arc::new(e))
                }
            };

            if let Some(inner) = inner.upgrade() {
                let mut inner = inner.lock().await;
                if inner.is_stale(generation) {
                    inner.stale = None;
                }
                if inner.is_loading(generation) {
                    inner.slot = match &outcome {
                        Ok(foods) => CacheSlot::Loaded(Arc::clone(foods)),
                        Err(_) => CacheSlot::Empty,
                    };
                } else {
                    debug!(
                        catalog.generation = generation,
                        "Cache cleared during fetch, result not stored"
                    );
                }
            }

            outcome
        }
        .boxed()
        .shared()
    }

    /// Filter the loaded catalog
    ///
    /// Never fetches: returns an empty list unless the cache is `Loaded`.
    /// Species is an exact filter; a non-empty query is matched as given,
    /// case-insensitively, against brand and product name. Catalog order is
    /// kept and every match is returned.
    pub async fn search_cached_foods(
        &self,
        query: &str,
        species: Option<Species>,
    ) -> Vec<FoodRecord> {
        let Some(foods) = self.loaded().await else {
            return Vec::new();
        };

        let needle = query.to_lowercase();
        foods
            .iter()
            .filter(|food| species.is_none_or(|s| food.species == s))
            .filter(|food| {
                needle.is_empty()
                    || food.brand.to_lowercase().contains(&needle)
                    || food.product_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Loaded record with `code`, if any
    pub async fn find_by_code(&self, code: &str) -> Option<FoodRecord> {
        self.loaded()
            .await?
            .iter()
            .find(|food| food.code == code)
            .cloned()
    }

    /// Drop the cached catalog
    ///
    /// A fetch already in flight still resolves for its callers, but its
    /// result is discarded. It stays tracked until it settles so the next
    /// load can wait for it.
    pub async fn clear_cache(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        if let CacheSlot::Loading { generation, load } =
            std::mem::replace(&mut inner.slot, CacheSlot::Empty)
        {
            inner.stale = Some((generation, load));
        }
        debug!(catalog.generation = inner.generation, "Food catalog cache cleared");
    }

    /// Current state
    pub async fn state(&self) -> CatalogState {
        match &self.inner.lock().await.slot {
            CacheSlot::Empty => CatalogState::Empty,
            CacheSlot::Loading { .. } => CatalogState::Loading,
            CacheSlot::Loaded(_) => CatalogState::Loaded,
        }
    }

    /// Number of cached records (0 unless loaded)
    pub async fn len(&self) -> usize {
        self.loaded().await.map_or(0, |foods| foods.len())
    }

    /// True unless a non-empty catalog is loaded
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn loaded(&self) -> Option<CatalogSnapshot> {
        match &self.inner.lock().await.slot {
            CacheSlot::Loaded(foods) => Some(Arc::clone(foods)),
            CacheSlot::Empty | CacheSlot::Loading { .. } => None,
        }
    }
}
