// ABOUTME: Percentile/value conversion engine for the Ascend self-tracking platform
// ABOUTME: Benchmark interpolation, normalization, wealth models, registry, distribution and trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

#![deny(unsafe_code)]

//! # Ascend Intelligence
//!
//! Deterministic, invertible models that map a raw measurement (bench press,
//! net worth, 5K time, wellbeing scores) to a population percentile and back,
//! plus the distribution and trend summaries built on top of them.
//!
//! Every function is synchronous and side-effect free apart from `tracing`
//! events. The [`percentile::MetricRegistry`] is built once and shared by
//! reference.

/// Achievement unlock rules
pub mod achievements;
/// Engine configuration
pub mod config;
/// Distribution synthesis for bell-curve display
pub mod distribution;
/// Goal progress evaluation
pub mod goals;
/// Percentile conversion engine
pub mod percentile;
/// Trend analytics over percentile history
pub mod trends;

pub use achievements::{Achievement, AchievementCondition, AchievementStatus};
pub use config::IntelligenceConfig;
pub use distribution::{build_distribution, CurveSource, DistributionCurve};
pub use goals::{GoalProgress, GoalStatus};
pub use percentile::{MetricArgs, MetricRegistry, ProfileDefaults};
pub use trends::{AggregationScale, PercentileZone, PeriodAggregate, Projection, Velocity};
