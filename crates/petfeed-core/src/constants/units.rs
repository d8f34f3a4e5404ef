// ABOUTME: Unit conversion constants for weight, volume, and measurable portions
// ABOUTME: Provides named constants to eliminate magic numbers in feeding calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453_592;

/// Grams of dry food in one standard measuring cup
pub const GRAMS_PER_CUP: f64 = 240.0;

/// Gram amounts per meal are snapped to this step
pub const GRAM_ROUNDING_STEP: f64 = 5.0;

/// Remainders below this collapse to a whole-cup label
pub const MIN_MEASURABLE_CUP_FRACTION: f64 = 1.0 / 16.0;

/// Fractions a kitchen measuring set can portion, in tie-break order
pub const MEASURABLE_CUP_FRACTIONS: [(f64, &str); 6] = [
    (1.0 / 8.0, "1/8"),
    (1.0 / 4.0, "1/4"),
    (1.0 / 3.0, "1/3"),
    (1.0 / 2.0, "1/2"),
    (2.0 / 3.0, "2/3"),
    (3.0 / 4.0, "3/4"),
];

/// Percent scale used by the transition planner
pub const PERCENT_SCALE: f64 = 100.0;
