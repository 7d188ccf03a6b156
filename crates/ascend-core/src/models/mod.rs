// ABOUTME: Core data models consumed by the percentile engine
// ABOUTME: Re-exports profile, metric definition, sample and category path types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! # Data Models
//!
//! The engine is a pure-function consumer: it reads these models from the
//! application shell for a single calculation and never stores them.
//!
//! - `UserProfile`: age, sex and bodyweight supplied per call
//! - `MetricDefinition`: binds a metric to a registered percentile function
//! - `PercentileSample`: one observed `(value, percentile, timestamp)` triple
//! - `CategoryPath`: dotted key of the owning category

mod category;
mod metric;
mod profile;

pub use category::CategoryPath;
pub use metric::{MetricDefinition, ParameterRole, PercentileSample};
pub use profile::{Gender, UserProfile, WeightUnit};
