// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for energy, portion, grading, and catalog defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Configuration defaults in the main crate are built from these.

/// Catalog client defaults (timeouts, search limits)
pub mod catalog;
/// Energy requirement coefficients and MER multipliers
pub mod energy;
/// Food grading category weights, thresholds, and grade bands
pub mod grading;
/// Unit conversion and measurement constants
pub mod units;
