// ABOUTME: Core types and constants for the petfeed feeding platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Petfeed Core
//!
//! Foundation crate providing shared types and constants for pet energy
//! calculations, food grading, and diet transition planning. This crate is
//! designed to change infrequently, enabling incremental compilation benefits
//! in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions, energy multipliers, grading tables
//! - **models**: Pet profiles, food records, and their enumerations

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`PetProfile`, `FoodRecord`, species and life stages)
pub mod models;
