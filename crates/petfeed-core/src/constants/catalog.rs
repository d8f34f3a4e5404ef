// ABOUTME: Food catalog client defaults
// ABOUTME: Base URL, request timeout, and search term limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default catalog API base URL
pub const DEFAULT_CATALOG_BASE_URL: &str = "http://localhost:8787/api";

/// Default request timeout for catalog calls (seconds)
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 15;

/// Shortest search term accepted by the per-item search endpoint
pub const MIN_SEARCH_TERM_LENGTH: usize = 2;

/// Service name used in upstream error messages and logs
pub const CATALOG_SERVICE_NAME: &str = "Food catalog";
