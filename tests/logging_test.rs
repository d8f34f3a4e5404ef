// ABOUTME: Tests for logging configuration parsing from the environment
// ABOUTME: Serial because they mutate process-wide environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use petfeed::logging::{AppLogger, LogFormat, LoggingConfig, SERVICE_NAME};
use serial_test::serial;
use std::env;

const LOG_KEYS: [&str; 5] = [
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_SPANS",
    "SERVICE_NAME",
];

fn clear_log_env() {
    for key in LOG_KEYS {
        env::remove_var(key);
    }
}

#[test]
fn test_default_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, SERVICE_NAME);
    assert_eq!(config.environment, "development");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_from_env_json_production() {
    clear_log_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    clear_log_env();

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert!(config.include_location);
    assert!(config.include_spans);
}

#[test]
#[serial]
fn test_from_env_unknown_format_falls_back_to_pretty() {
    clear_log_env();
    env::set_var("LOG_FORMAT", "xml");
    env::set_var("SERVICE_NAME", "petfeed-test");

    let config = LoggingConfig::from_env();
    clear_log_env();

    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "petfeed-test");
}

#[test]
fn test_domain_events_without_subscriber() {
    AppLogger::log_catalog_fetch_started(1);
    AppLogger::log_catalog_fetch_completed(1, 42, 12);
    AppLogger::log_catalog_fetch_failed(2, "connection refused", 5);
    AppLogger::log_food_graded("0001", 'B', 85);
}
