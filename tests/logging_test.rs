// ABOUTME: Integration tests for logging configuration
// ABOUTME: Validates environment handling, CLI defaults and format parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ascend::logging::{AppLogger, LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_KEYS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
];

fn clear_logging_env() {
    for key in LOGGING_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "ascend-test");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "ascend-test");
    assert!(config.include_location);
    assert!(config.include_thread);
    assert!(config.include_spans);
}

#[test]
#[serial]
fn test_development_env_opts_into_details() {
    clear_logging_env();
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(config.include_location);
    assert!(!config.include_thread);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "ascend");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_cli_config_is_quiet_and_compact() {
    clear_logging_env();
    let quiet = LoggingConfig::for_cli(false);
    let verbose = LoggingConfig::for_cli(true);

    assert_eq!(quiet.level, "warn");
    assert_eq!(verbose.level, "debug");
    assert_eq!(quiet.format, LogFormat::Compact);

    env::set_var("RUST_LOG", "trace");
    let overridden = LoggingConfig::for_cli(false);
    clear_logging_env();
    assert_eq!(overridden.level, "trace");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_env_value(Some("json")), LogFormat::Json);
    assert_eq!(LogFormat::from_env_value(Some("compact")), LogFormat::Compact);
    assert_eq!(LogFormat::from_env_value(Some("fancy")), LogFormat::Pretty);
    assert_eq!(LogFormat::from_env_value(None), LogFormat::Pretty);
}

#[test]
fn test_app_logger_without_subscriber() {
    AppLogger::log_percentile_computed("iq_percentile", Some(97.7), 12);
    AppLogger::log_percentile_computed("unknown_percentile", None, 3);
    AppLogger::log_distribution_built("IQ", "canonical", 0);
}
