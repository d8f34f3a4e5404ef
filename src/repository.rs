// ABOUTME: Storage abstraction for saved pets and calculation history
// ABOUTME: Async repository traits with DashMap-backed in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repository abstraction
//!
//! Persistence is a collaborator of the calculators, never a dependency of
//! them. Callers pick a backend by implementing [`PetRepository`] and
//! [`CalculationHistoryRepository`]; the in-memory versions here serve tests
//! and single-process use.

use crate::intelligence::{EnergyResult, PortionResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use petfeed_core::errors::{AppError, AppResult};
use petfeed_core::models::PetProfile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// A named pet profile kept between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPet {
    /// Identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Feeding inputs
    pub profile: PetProfile,
    /// When the pet was first saved
    pub created_at: DateTime<Utc>,
}

impl SavedPet {
    /// New pet with a fresh id
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the name is blank or the weight is not positive
    pub fn new(name: impl Into<String>, profile: PetProfile) -> AppResult<Self> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(AppError::invalid_input("Pet name cannot be empty"));
        }
        let weight_kg = profile.weight_kg();
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Pet weight must be positive"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            profile,
            created_at: Utc::now(),
        })
    }
}

/// One stored calculator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    /// Identifier
    pub id: Uuid,
    /// Pet the calculation was made for
    pub pet_id: Uuid,
    /// Catalog code of the food used for portions, if any
    pub food_code: Option<String>,
    /// Energy needs at the time
    pub energy: EnergyResult,
    /// Portions of `food_code`
    pub portions: Option<PortionResult>,
    /// When the calculation was made
    pub created_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// New record with a fresh id, timestamped now
    #[must_use]
    pub fn new(
        pet_id: Uuid,
        food_code: Option<String>,
        energy: EnergyResult,
        portions: Option<PortionResult>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            pet_id,
            food_code,
            energy,
            portions,
            created_at: Utc::now(),
        }
    }
}

/// Saved pet storage
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Insert or replace a pet by id
    async fn save(&self, pet: SavedPet) -> AppResult<Uuid>;

    /// Pet by id
    async fn get(&self, id: Uuid) -> AppResult<Option<SavedPet>>;

    /// All pets, oldest first
    async fn list(&self) -> AppResult<Vec<SavedPet>>;

    /// Remove a pet; `false` if it did not exist
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Calculation history storage
#[async_trait]
pub trait CalculationHistoryRepository: Send + Sync {
    /// Append a record
    async fn save(&self, record: CalculationRecord) -> AppResult<Uuid>;

    /// All records, newest first
    async fn list(&self) -> AppResult<Vec<CalculationRecord>>;

    /// Records for one pet, newest first
    async fn list_for_pet(&self, pet_id: Uuid) -> AppResult<Vec<CalculationRecord>>;

    /// Remove a record; `false` if it did not exist
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// In-memory [`PetRepository`]
#[derive(Clone, Default)]
pub struct InMemoryPetRepository {
    pets: Arc<DashMap<Uuid, SavedPet>>,
}

impl InMemoryPetRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn save(&self, pet: SavedPet) -> AppResult<Uuid> {
        let id = pet.id;
        self.pets.insert(id, pet);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<SavedPet>> {
        Ok(self.pets.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> AppResult<Vec<SavedPet>> {
        let mut pets: Vec<SavedPet> = self.pets.iter().map(|entry| entry.value().clone()).collect();
        pets.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(pets)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.pets.remove(&id).is_some())
    }
}

/// In-memory [`CalculationHistoryRepository`]
#[derive(Clone, Default)]
pub struct InMemoryHistoryRepository {
    records: Arc<DashMap<Uuid, CalculationRecord>>,
}

impl InMemoryHistoryRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first(records: impl Iterator<Item = CalculationRecord>) -> Vec<CalculationRecord> {
        let mut records: Vec<CalculationRecord> = records.collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        records
    }
}

#[async_trait]
impl CalculationHistoryRepository for InMemoryHistoryRepository {
    async fn save(&self, record: CalculationRecord) -> AppResult<Uuid> {
        let id = record.id;
        self.records.insert(id, record);
        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<CalculationRecord>> {
        Ok(Self::newest_first(
            self.records.iter().map(|entry| entry.value().clone()),
        ))
    }

    async fn list_for_pet(&self, pet_id: Uuid) -> AppResult<Vec<CalculationRecord>> {
        Ok(Self::newest_first(
            self.records
                .iter()
                .filter(|entry| entry.value().pet_id == pet_id)
                .map(|entry| entry.value().clone()),
        ))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.records.remove(&id).is_some())
    }
}
