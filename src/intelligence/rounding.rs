// ABOUTME: Rounding helpers for kcal values, gram amounts, and kitchen-measurable cup labels
// ABOUTME: Nearest-fraction cup rounding with deterministic first-listed tie-breaking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use petfeed_core::constants::units::{
    GRAMS_PER_CUP, MEASURABLE_CUP_FRACTIONS, MIN_MEASURABLE_CUP_FRACTION,
};

/// Round half up (toward positive infinity on exact halves)
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round a non-negative kcal value to a whole number
#[must_use]
pub fn round_kcal(value: f64) -> u32 {
    round_half_up(value.max(0.0)) as u32
}

/// Snap `value` to the nearest multiple of `step`
#[must_use]
pub fn round_to_nearest(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    round_half_up(value / step) * step
}

/// Convert cups of dry food to grams using the standard 240 g/cup density
#[must_use]
pub fn cups_to_grams(cups: f64) -> f64 {
    cups * GRAMS_PER_CUP
}

/// Map a continuous cup amount to a label a measuring cup set can portion.
///
/// The remainder after whole cups snaps to the nearest of 1/8, 1/4, 1/3, 1/2,
/// 2/3, 3/4. Exact ties keep the fraction listed first. Remainders under 1/16
/// collapse to the whole-cup label; remainders above 7/8 still map to 3/4.
///
/// ```
/// use petfeed::intelligence::rounding::round_to_measurable_cups;
///
/// assert_eq!(round_to_measurable_cups(0.9), "3/4 cup");
/// assert_eq!(round_to_measurable_cups(1.5), "1 1/2 cups");
/// assert_eq!(round_to_measurable_cups(2.01), "2 cups");
/// ```
#[must_use]
pub fn round_to_measurable_cups(cups: f64) -> String {
    let cups = if cups.is_finite() { cups.max(0.0) } else { 0.0 };
    let whole = cups.floor();
    let remainder = cups - whole;
    let whole_count = whole as u64;

    if remainder < MIN_MEASURABLE_CUP_FRACTION {
        let plural = if whole_count > 1 { "s" } else { "" };
        return format!("{whole_count} cup{plural}");
    }

    let (_, fraction) = MEASURABLE_CUP_FRACTIONS.iter().skip(1).fold(
        (
            (remainder - MEASURABLE_CUP_FRACTIONS[0].0).abs(),
            MEASURABLE_CUP_FRACTIONS[0].1,
        ),
        |(best_distance, best_label), &(value, label)| {
            let distance = (remainder - value).abs();
            if distance < best_distance {
                (distance, label)
            } else {
                (best_distance, best_label)
            }
        },
    );

    if whole_count == 0 {
        format!("{fraction} cup")
    } else {
        format!("{whole_count} {fraction} cups")
    }
}
