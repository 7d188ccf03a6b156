// ABOUTME: Percentile conversion engine: tables, kernel, normalization, wealth models, registry
// ABOUTME: Maps raw measurements to population percentiles and back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! # Percentile Engine
//!
//! Data flows leaves-first:
//!
//! 1. [`tables`] hold compiled-in benchmark values
//! 2. [`benchmark`] validates them into curves over percentile anchors
//! 3. [`interpolation`] converts between raw value and percentile
//! 4. [`normalization`] rescales raw measurements by age and bodyweight
//! 5. [`wealth`] and [`normal`] provide the parametric laws
//! 6. [`registry`] binds function names to models via [`families`]
//!
//! Everything here is synchronous and free of shared mutable state.

/// Typed function arguments and profile defaults
pub mod args;
/// Validated benchmark curves
pub mod benchmark;
/// Per-family registration modules
pub mod families;
/// Piecewise-linear interpolation kernel
pub mod interpolation;
/// Metric evaluation models
pub mod model;
/// Normal distribution approximations
pub mod normal;
/// Age and bodyweight normalization
pub mod normalization;
/// Name-keyed metric registry
pub mod registry;
/// Compiled-in benchmark tables
pub mod tables;
/// Net worth and income models
pub mod wealth;

pub use args::{MetricArgs, ProfileDefaults};
pub use benchmark::{BenchmarkCurve, BenchmarkError, Scale};
pub use model::{Direction, MetricModel};
pub use registry::{
    MetricFamily, MetricHandle, MetricRegistry, RegisteredMetric, RegistryBuilder, RegistryError,
};
pub use wealth::{AgeGroup, IncomeModel, NetWorthModel, NetWorthParams};

use ascend_core::constants::percentile::{MAX, MIN};

/// Clamp to `[0, 100]`, mapping NaN to 0
pub(crate) fn clamp_percentile(percentile: f64) -> f64 {
    if percentile.is_nan() {
        MIN
    } else {
        percentile.clamp(MIN, MAX)
    }
}
