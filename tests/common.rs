// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, standard registry construction and sample builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ascend`

use ascend_core::models::PercentileSample;
use ascend_intelligence::config::IntelligenceConfig;
use ascend_intelligence::percentile::{MetricRegistry, ProfileDefaults};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Registry with every built-in family and default settings
pub fn standard_registry() -> MetricRegistry {
    init_test_logging();
    MetricRegistry::try_standard(&IntelligenceConfig::default(), ProfileDefaults::default())
        .unwrap()
}

/// Fixed reference instant for reproducible timestamps
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Sample recorded `days` after [`base_time`]
pub fn sample_at(days: i64, percentile: f64) -> PercentileSample {
    PercentileSample::new(percentile, percentile, base_time() + Duration::days(days))
}

/// Approximate float equality
pub fn approx(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance
}
