// ABOUTME: Core domain models for pet feeding calculations
// ABOUTME: Re-exports pet profile and food record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod food;
mod pet;

pub use food::{FoodRecord, FoodSource};
pub use pet::{
    kg_to_lb, lb_to_kg, ActivityLevel, FeedingFrequency, LifeStage, PetProfile,
    ReproductiveStatus, Species, WeightUnit,
};
