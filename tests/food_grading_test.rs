// ABOUTME: Integration tests for the weighted food grading engine
// ABOUTME: Covers category heuristics, overall rounding, grade bands, and configurable thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::food;
use petfeed::config::GradingConfig;
use petfeed::external::MockCatalogClient;
use petfeed::intelligence::{grade_food, GradingResult, LetterGrade};
use petfeed::models::{FoodRecord, LifeStage, Species};

fn premium_dog_food() -> FoodRecord {
    FoodRecord {
        lifestage: "Adult maintenance".to_owned(),
        ingredients: Some("Deboned chicken, chicken meal, brown rice".to_owned()),
        ..food("100", "Acme", "Chicken Kibble", Species::Dog)
    }
}

fn budget_dog_food() -> FoodRecord {
    FoodRecord {
        lifestage: "Adult".to_owned(),
        ingredients: Some(
            "Ground corn, meat and bone meal, animal fat (preserved with BHA), red 40, yellow 5"
                .to_owned(),
        ),
        ..food("200", "Budget Bowl", "Original Kibble", Species::Dog)
    }
}

fn category_score(result: &GradingResult, name: &str) -> u8 {
    result
        .categories
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.score)
        .unwrap_or_else(|| panic!("missing category {name}"))
}

#[test]
fn test_premium_food_scores() {
    common::init_test_logging();
    let result = grade_food(
        &premium_dog_food(),
        Species::Dog,
        LifeStage::Adult,
        &GradingConfig::default(),
    );

    assert_eq!(category_score(&result, "AAFCO Compliance"), 85);
    assert_eq!(category_score(&result, "Protein Quality"), 80);
    assert_eq!(category_score(&result, "Ingredient Quality"), 85);
    assert_eq!(category_score(&result, "Nutritional Balance"), 80);
    assert_eq!(category_score(&result, "Safety Flags"), 95);

    // 84.5 rounds half up
    assert_eq!(result.overall_score, 85);
    assert_eq!(result.overall_grade, LetterGrade::B);
    assert!(result.concerns.is_empty());
    assert_eq!(result.positives.len(), 5);
}

#[test]
fn test_budget_food_for_wrong_species() {
    let result = grade_food(
        &budget_dog_food(),
        Species::Cat,
        LifeStage::Adult,
        &GradingConfig::default(),
    );

    assert_eq!(category_score(&result, "Protein Quality"), 70);
    assert_eq!(category_score(&result, "Ingredient Quality"), 70);
    // BHA, red 40, yellow 5
    assert_eq!(category_score(&result, "Safety Flags"), 50);
    assert_eq!(result.overall_score, 72);
    assert_eq!(result.overall_grade, LetterGrade::C);

    let defaults = GradingConfig::default();
    assert_eq!(
        result.concerns,
        vec![
            defaults.categories.protein_quality.concern.clone(),
            defaults.categories.safety_flags.concern.clone(),
        ]
    );
    assert_eq!(
        result.positives,
        vec![
            defaults.categories.aafco_compliance.positive.clone(),
            defaults.categories.nutritional_balance.positive.clone(),
        ]
    );
}

#[test]
fn test_failing_grade_and_safety_floor() {
    let food = FoodRecord {
        lifestage: String::new(),
        kcal_per_cup: 0.0,
        kcal_per_kg: 0.0,
        ingredients: Some(
            "corn, BHA, BHT, ethoxyquin, propylene glycol, red 40, yellow 5, yellow 6, blue 2"
                .to_owned(),
        ),
        ..food("300", "Mystery", "Chow", Species::Dog)
    };
    let result = grade_food(&food, Species::Cat, LifeStage::Adult, &GradingConfig::default());

    assert_eq!(category_score(&result, "Safety Flags"), 0);
    assert_eq!(category_score(&result, "Nutritional Balance"), 60);
    assert_eq!(result.overall_score, 58);
    assert_eq!(result.overall_grade, LetterGrade::F);
}

#[test]
fn test_life_stage_statement_matching() {
    let config = GradingConfig::default();
    let with_stage = |statement: &str| FoodRecord {
        lifestage: statement.to_owned(),
        ..premium_dog_food()
    };

    let growth = grade_food(&with_stage("Growth"), Species::Dog, LifeStage::Puppy, &config);
    assert_eq!(category_score(&growth, "AAFCO Compliance"), 85);

    let all_stages = grade_food(
        &with_stage("All Life Stages"),
        Species::Dog,
        LifeStage::Senior,
        &config,
    );
    assert_eq!(category_score(&all_stages, "AAFCO Compliance"), 85);

    let growth_for_adult = grade_food(&with_stage("Growth"), Species::Dog, LifeStage::Adult, &config);
    assert_eq!(category_score(&growth_for_adult, "AAFCO Compliance"), 70);
}

#[test]
fn test_missing_ingredient_list() {
    let food = FoodRecord {
        ingredients: None,
        ..premium_dog_food()
    };
    let result = grade_food(&food, Species::Dog, LifeStage::Adult, &GradingConfig::default());
    assert_eq!(category_score(&result, "Ingredient Quality"), 65);
    assert_eq!(category_score(&result, "Safety Flags"), 95);
}

#[test]
fn test_result_bounds_and_category_order() {
    let config = GradingConfig::default();
    let expected_names = [
        "AAFCO Compliance",
        "Protein Quality",
        "Ingredient Quality",
        "Nutritional Balance",
        "Safety Flags",
    ];

    for food in MockCatalogClient::sample_foods() {
        for species in [Species::Dog, Species::Cat] {
            for stage in [
                LifeStage::Puppy,
                LifeStage::Kitten,
                LifeStage::Adult,
                LifeStage::Senior,
            ] {
                let result = grade_food(&food, species, stage, &config);
                assert!(result.overall_score <= 100);
                let names: Vec<&str> = result.categories.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, expected_names);
                let weight_sum: u32 = result.categories.iter().map(|c| u32::from(c.weight)).sum();
                assert_eq!(weight_sum, 100);
                assert!(result.categories.iter().all(|c| c.score <= 100));
            }
        }
    }
}

#[test]
fn test_thresholds_and_bands_are_configurable() {
    let mut config = GradingConfig::default();
    config.categories.protein_quality.concern_below = 85;
    config.categories.protein_quality.positive_at_or_above = 90;
    config.bands.a_min = 84;

    let result = grade_food(&premium_dog_food(), Species::Dog, LifeStage::Adult, &config);

    assert_eq!(result.overall_grade, LetterGrade::A);
    assert_eq!(
        result.concerns,
        vec![config.categories.protein_quality.concern.clone()]
    );
    assert_eq!(result.positives.len(), 4);
}

#[test]
fn test_grade_serializes_as_letter() {
    let result = grade_food(
        &premium_dog_food(),
        Species::Dog,
        LifeStage::Adult,
        &GradingConfig::default(),
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["overallGrade"], "B");
    assert_eq!(json["overallScore"], 85);
    assert_eq!(result.overall_grade.to_string(), "B");
}
