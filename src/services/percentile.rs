// ABOUTME: Percentile service facade consumed by rendering and dashboard layers
// ABOUTME: Forward and inverse percentile lookups, distribution curves, zones and goal progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use crate::config::AppConfig;
use crate::logging::AppLogger;
use ascend_core::errors::AppResult;
use ascend_core::models::{MetricDefinition, PercentileSample, UserProfile};
use ascend_intelligence::config::IntelligenceConfig;
use ascend_intelligence::distribution::{build_distribution, CurveSource, DistributionCurve};
use ascend_intelligence::goals::GoalProgress;
use ascend_intelligence::percentile::{MetricArgs, MetricRegistry};
use ascend_intelligence::trends::{
    self, DropWarning, PercentileZone, Projection, Velocity,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Stateless percentile operations over a shared registry
///
/// Cloning is cheap; the registry is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PercentileService {
    registry: Arc<MetricRegistry>,
    config: IntelligenceConfig,
}

impl PercentileService {
    /// Wrap an existing registry
    #[must_use]
    pub const fn new(registry: Arc<MetricRegistry>, config: IntelligenceConfig) -> Self {
        Self { registry, config }
    }

    /// Build the standard registry from application configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError` if a compiled-in benchmark table is malformed
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let registry = MetricRegistry::try_standard(&config.intelligence, config.profile_defaults)?;
        Ok(Self::new(Arc::new(registry), config.intelligence.clone()))
    }

    /// Registry in use
    #[must_use]
    pub fn registry(&self) -> &MetricRegistry {
        &self.registry
    }

    /// Engine tuning in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Percentile of a raw value for a registered function
    ///
    /// Arguments are taken from the profile according to the function's own
    /// parameter roles. `None` when the function is unknown.
    #[must_use]
    pub fn compute_percentile(
        &self,
        function_name: &str,
        raw_value: f64,
        profile: &UserProfile,
    ) -> Option<f64> {
        let start = Instant::now();
        let percentile = self.registry.resolve(function_name).map(|handle| {
            let args = MetricArgs::from_profile(raw_value, profile, handle.metric().roles);
            handle.percentile(&args)
        });
        AppLogger::log_percentile_computed(function_name, percentile, elapsed_us(start));
        percentile
    }

    /// Raw value at a percentile for a registered function, `None` when unknown
    #[must_use]
    pub fn compute_value_at_percentile(
        &self,
        function_name: &str,
        percentile: f64,
        profile: &UserProfile,
    ) -> Option<f64> {
        let handle = self.registry.resolve(function_name)?;
        let args = MetricArgs::from_profile(0.0, profile, handle.metric().roles);
        Some(handle.value_at(percentile, &args))
    }

    /// Percentile for a metric definition
    ///
    /// Marshals only the profile fields the definition declares. Manual-entry
    /// definitions and unknown functions yield `None`.
    #[must_use]
    pub fn percentile_for_definition(
        &self,
        definition: &MetricDefinition,
        raw_value: f64,
        profile: &UserProfile,
    ) -> Option<f64> {
        let function = definition.percentile_function.as_deref()?;
        let start = Instant::now();
        let args = MetricArgs::from_profile(raw_value, profile, &definition.parameters);
        let percentile = self.registry.percentile(function, &args);
        AppLogger::log_percentile_computed(function, percentile, elapsed_us(start));
        percentile
    }

    /// Raw value at a percentile for a metric definition
    #[must_use]
    pub fn value_for_definition(
        &self,
        definition: &MetricDefinition,
        percentile: f64,
        profile: &UserProfile,
    ) -> Option<f64> {
        let function = definition.percentile_function.as_deref()?;
        let args = MetricArgs::from_profile(0.0, profile, &definition.parameters);
        self.registry.value_at_percentile(function, percentile, &args)
    }

    /// Check a definition against the registry
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when the definition is inconsistent
    pub fn validate_definition(&self, definition: &MetricDefinition) -> AppResult<()> {
        self.registry.validate_definition(definition)
    }

    /// Density and cumulative curves for a slice of sample percentiles
    #[must_use]
    pub fn build_distribution_curve(&self, percentiles: &[f64]) -> DistributionCurve {
        build_distribution(percentiles, &self.config.distribution)
    }

    /// Distribution curve for a metric's sample history
    #[must_use]
    pub fn distribution_for_samples(
        &self,
        metric_name: &str,
        samples: &[PercentileSample],
    ) -> DistributionCurve {
        let percentiles: Vec<f64> = samples.iter().filter_map(|s| s.percentile).collect();
        let curve = self.build_distribution_curve(&percentiles);
        let source = match curve.source {
            CurveSource::Empirical => "empirical",
            CurveSource::Canonical => "canonical",
        };
        AppLogger::log_distribution_built(metric_name, source, curve.sample_count);
        curve
    }

    /// Display zone of a percentile
    #[must_use]
    pub fn zone(&self, percentile: f64) -> PercentileZone {
        PercentileZone::classify(percentile, &self.config.trends.zones)
    }

    /// Progress toward a target percentile
    #[must_use]
    pub fn goal_progress(&self, current: f64, target: f64) -> Option<GoalProgress> {
        GoalProgress::evaluate(current, target, &self.config.trends)
    }

    /// Velocity over a sample history
    #[must_use]
    pub fn velocity(&self, samples: &[PercentileSample]) -> Option<Velocity> {
        trends::velocity(samples)
    }

    /// Linear projection over a sample history
    #[must_use]
    pub fn projection(&self, samples: &[PercentileSample]) -> Option<Projection> {
        trends::project(samples)
    }

    /// Weighted overall score across categories
    #[must_use]
    pub fn overall_score(
        &self,
        percentiles: &[(String, f64)],
        weights: &HashMap<String, f64>,
    ) -> f64 {
        trends::overall_score(percentiles, weights, &self.config.trends)
    }

    /// Drop warning between two consecutive category percentiles
    #[must_use]
    pub fn detect_drop(&self, category: &str, previous: f64, latest: f64) -> Option<DropWarning> {
        trends::detect_drop(category, previous, latest, &self.config.trends)
    }
}

fn elapsed_us(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}
