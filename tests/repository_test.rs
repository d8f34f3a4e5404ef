// ABOUTME: Tests for the in-memory saved pet and calculation history repositories
// ABOUTME: Covers save/list/delete semantics, ordering, and per-pet filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::{Duration, Utc};
use common::{food, reference_dog};
use petfeed::config::FeedingConfig;
use petfeed::errors::ErrorCode;
use petfeed::intelligence::{calculate_feeding, calculate_portions_for_food};
use petfeed::models::{PetProfile, Species};
use petfeed::repository::{
    CalculationHistoryRepository, CalculationRecord, InMemoryHistoryRepository,
    InMemoryPetRepository, PetRepository, SavedPet,
};
use uuid::Uuid;

fn record_for(pet_id: Uuid, minutes_ago: i64) -> CalculationRecord {
    let config = FeedingConfig::default();
    let energy = calculate_feeding(&reference_dog(), &config).unwrap();
    let kibble = food("100", "Acme", "Chicken Kibble", Species::Dog);
    let portions = calculate_portions_for_food(&energy, &kibble, &config.portions).unwrap();

    CalculationRecord {
        created_at: Utc::now() - Duration::minutes(minutes_ago),
        ..CalculationRecord::new(pet_id, Some(kibble.code), energy, Some(portions))
    }
}

#[test]
fn test_saved_pet_validation() {
    assert!(SavedPet::new("  Rex ", reference_dog()).is_ok());
    assert_eq!(SavedPet::new("Rex", reference_dog()).unwrap().name, "Rex");

    let err = SavedPet::new("   ", reference_dog()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let weightless = PetProfile {
        target_weight: 0.0,
        ..reference_dog()
    };
    assert!(SavedPet::new("Ghost", weightless).is_err());
}

#[tokio::test]
async fn test_pet_repository_round_trip() -> Result<()> {
    let repo = InMemoryPetRepository::new();
    let mut older = SavedPet::new("Rex", reference_dog())?;
    older.created_at = Utc::now() - Duration::days(1);
    let newer = SavedPet::new("Milo", reference_dog())?;

    let newer_id = repo.save(newer.clone()).await?;
    let older_id = repo.save(older.clone()).await?;

    assert_eq!(repo.get(newer_id).await?, Some(newer));
    let names: Vec<String> = repo.list().await?.into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Rex", "Milo"]);

    // Saving again replaces
    let renamed = SavedPet {
        name: "Rexy".to_owned(),
        ..older
    };
    repo.save(renamed).await?;
    assert_eq!(repo.list().await?.len(), 2);
    assert_eq!(repo.get(older_id).await?.unwrap().name, "Rexy");

    assert!(repo.delete(older_id).await?);
    assert!(!repo.delete(older_id).await?);
    assert!(repo.get(older_id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_history_repository_orders_newest_first() -> Result<()> {
    let repo = InMemoryHistoryRepository::new();
    let rex = Uuid::new_v4();
    let milo = Uuid::new_v4();

    let oldest = repo.save(record_for(rex, 30)).await?;
    let newest = repo.save(record_for(rex, 1)).await?;
    repo.save(record_for(milo, 10)).await?;

    let rex_history = repo.list_for_pet(rex).await?;
    let ids: Vec<Uuid> = rex_history.iter().map(|r| r.id).collect();
    assert_eq!(ids, [newest, oldest]);
    assert_eq!(rex_history[0].energy.daily_kcal, 630);
    assert_eq!(
        rex_history[0].portions.as_ref().map(|p| p.cups_per_meal_label.as_str()),
        Some("3/4 cup")
    );

    let all = repo.list().await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, newest);

    assert!(repo.delete(oldest).await?);
    assert!(!repo.delete(Uuid::new_v4()).await?);
    assert_eq!(repo.list_for_pet(rex).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_repositories_usable_as_trait_objects() -> Result<()> {
    let pets: Box<dyn PetRepository> = Box::new(InMemoryPetRepository::new());
    let history: Box<dyn CalculationHistoryRepository> = Box::new(InMemoryHistoryRepository::new());

    let id = pets.save(SavedPet::new("Rex", reference_dog())?).await?;
    history.save(record_for(id, 0)).await?;

    assert_eq!(pets.list().await?.len(), 1);
    assert_eq!(history.list_for_pet(id).await?.len(), 1);
    Ok(())
}
