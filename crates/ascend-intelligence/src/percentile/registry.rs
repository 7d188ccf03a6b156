// ABOUTME: Name-keyed metric registry built once from per-family registration modules
// ABOUTME: Resolves percentile function names, validates metric definitions, fails closed on unknowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! # Metric Registry
//!
//! The registry is an immutable map from function name (e.g.
//! `bench_press_percentile`) to a [`RegisteredMetric`]. It is assembled by a
//! [`RegistryBuilder`] that each family module in [`super::families`]
//! populates, then frozen and shared by reference.
//!
//! Lookups fail closed: an unknown name yields `None`, which callers treat as
//! "manual entry only".
//!
//! ```rust
//! use ascend_intelligence::config::IntelligenceConfig;
//! use ascend_intelligence::percentile::{MetricArgs, MetricRegistry, ProfileDefaults};
//!
//! let registry = MetricRegistry::try_standard(&IntelligenceConfig::default(), ProfileDefaults::default())
//!     .expect("compiled-in tables are valid");
//! let iq = registry.percentile("iq_percentile", &MetricArgs::new(130.0));
//! assert!(matches!(iq, Some(p) if (p - 97.7).abs() < 0.1));
//! assert!(registry.percentile("no_such_metric", &MetricArgs::new(1.0)).is_none());
//! ```

use super::args::{MetricArgs, ProfileDefaults};
use super::benchmark::BenchmarkError;
use super::families;
use super::model::{MetricModel, ModelContext};
use super::wealth::{IncomeModel, NetWorthModel};
use crate::config::intelligence::IntelligenceConfig;
use ascend_core::errors::{AppError, AppResult};
use ascend_core::models::{MetricDefinition, ParameterRole};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Domain family a metric is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum MetricFamily {
    /// Multi-joint lifts scored by bodyweight ratio
    CompoundLift,
    /// Single-joint lifts scored by working weight
    IsolationLift,
    /// Running and general strength ratios
    Conditioning,
    /// Cognitive scores
    Cognitive,
    /// Net worth and income
    Financial,
    /// Emotional and mental-health scales
    Emotional,
    /// Social scales
    Social,
}

impl MetricFamily {
    /// Snake-case label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CompoundLift => "compound_lift",
            Self::IsolationLift => "isolation_lift",
            Self::Conditioning => "conditioning",
            Self::Cognitive => "cognitive",
            Self::Financial => "financial",
            Self::Emotional => "emotional",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for MetricFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures while assembling the registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A compiled-in table is malformed
    #[error("benchmark table for '{metric}' is invalid: {source}")]
    Benchmark {
        /// Metric being registered
        metric: &'static str,
        /// Table defect
        #[source]
        source: BenchmarkError,
    },

    /// Two registrations share a name
    #[error("metric '{0}' registered twice")]
    Duplicate(&'static str),
}

/// Signature of a family module's registration function
pub type FamilyRegistration = fn(&mut RegistryBuilder) -> Result<(), RegistryError>;

/// Registration entry
#[derive(Debug, Clone)]
pub struct RegisteredMetric {
    /// Function name
    pub name: &'static str,
    /// Display label
    pub label: &'static str,
    /// Domain family
    pub family: MetricFamily,
    /// Parameter roles in call order
    pub roles: &'static [ParameterRole],
    /// Evaluation model
    pub model: MetricModel,
}

/// A resolved metric bound to the registry's shared context
#[derive(Debug, Clone, Copy)]
pub struct MetricHandle<'a> {
    metric: &'a RegisteredMetric,
    context: &'a ModelContext,
}

impl<'a> MetricHandle<'a> {
    /// Registration entry
    #[must_use]
    pub const fn metric(&self) -> &'a RegisteredMetric {
        self.metric
    }

    /// Percentile for the given arguments
    #[must_use]
    pub fn percentile(&self, args: &MetricArgs) -> f64 {
        self.metric.model.percentile(args, self.context)
    }

    /// Raw value at a percentile
    #[must_use]
    pub fn value_at(&self, percentile: f64, args: &MetricArgs) -> f64 {
        self.metric.model.value_at(percentile, args, self.context)
    }
}

/// Mutable registry under construction
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    metrics: HashMap<&'static str, RegisteredMetric>,
}

impl RegistryBuilder {
    /// Empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a metric
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Duplicate` if the name is taken
    pub fn register(
        &mut self,
        name: &'static str,
        label: &'static str,
        family: MetricFamily,
        roles: &'static [ParameterRole],
        model: MetricModel,
    ) -> Result<(), RegistryError> {
        if self.metrics.contains_key(name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.metrics.insert(
            name,
            RegisteredMetric {
                name,
                label,
                family,
                roles,
                model,
            },
        );
        Ok(())
    }

    /// Attach a table-validation failure to the metric it belongs to
    pub(crate) fn table<T>(
        metric: &'static str,
        result: Result<T, BenchmarkError>,
    ) -> Result<T, RegistryError> {
        result.map_err(|source| RegistryError::Benchmark { metric, source })
    }

    /// Number of metrics registered so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Freeze into an immutable registry
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if the income breakpoint table is malformed
    pub fn build(
        self,
        config: &IntelligenceConfig,
        defaults: ProfileDefaults,
    ) -> Result<MetricRegistry, RegistryError> {
        let income = Self::table("income_percentile", IncomeModel::new(&config.wealth))?;
        Ok(MetricRegistry {
            metrics: self.metrics,
            context: ModelContext {
                normalization: config.normalization.clone(),
                net_worth: NetWorthModel::new(&config.wealth),
                income,
                defaults,
            },
        })
    }
}

/// Immutable name-keyed metric registry
#[derive(Debug, Clone)]
pub struct MetricRegistry {
    metrics: HashMap<&'static str, RegisteredMetric>,
    context: ModelContext,
}

impl MetricRegistry {
    /// Registry with every built-in family
    ///
    /// # Errors
    ///
    /// Returns `AppError` (`ConfigInvalid`) if any compiled-in benchmark table
    /// fails validation. This is a build defect and should abort startup.
    pub fn try_standard(
        config: &IntelligenceConfig,
        defaults: ProfileDefaults,
    ) -> AppResult<Self> {
        let mut builder = RegistryBuilder::new();
        let families: [(&str, FamilyRegistration); 5] = [
            ("physical", families::physical::register),
            ("cognitive", families::cognitive::register),
            ("financial", families::financial::register),
            ("emotional", families::emotional::register),
            ("social", families::social::register),
        ];

        for (family, register) in families {
            let before = builder.len();
            register(&mut builder).map_err(|e| {
                AppError::config_invalid(format!("{family} registration failed: {e}"))
                    .with_source(e)
            })?;
            debug!(family, added = builder.len() - before, "registered metric family");
        }

        let registry = builder
            .build(config, defaults)
            .map_err(|e| AppError::config_invalid(e.to_string()).with_source(e))?;
        info!(metrics = registry.len(), "metric registry ready");
        Ok(registry)
    }

    /// Look up a metric by function name
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<MetricHandle<'_>> {
        let Some(metric) = self.metrics.get(name) else {
            debug!(metric = name, "no percentile function registered");
            return None;
        };
        Some(MetricHandle {
            metric,
            context: &self.context,
        })
    }

    /// Percentile for a named metric, `None` if unknown
    #[must_use]
    pub fn percentile(&self, name: &str, args: &MetricArgs) -> Option<f64> {
        self.resolve(name).map(|handle| handle.percentile(args))
    }

    /// Raw value at a percentile for a named metric, `None` if unknown
    #[must_use]
    pub fn value_at_percentile(
        &self,
        name: &str,
        percentile: f64,
        args: &MetricArgs,
    ) -> Option<f64> {
        self.resolve(name)
            .map(|handle| handle.value_at(percentile, args))
    }

    /// Check a metric definition against the registry
    ///
    /// A bound function must exist and the declared parameter roles must
    /// match its signature exactly. Manual-entry definitions always pass.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` describing the first mismatch
    pub fn validate_definition(&self, definition: &MetricDefinition) -> AppResult<()> {
        definition.validate_shape().inspect_err(|e| {
            warn!(metric = %definition.metric_name, error = %e, "rejected metric definition");
        })?;
        let Some(function) = &definition.percentile_function else {
            return Ok(());
        };

        let Some(metric) = self.metrics.get(function.as_str()) else {
            warn!(metric = %definition.metric_name, function = %function, "unknown percentile function");
            return Err(AppError::invalid_input(format!(
                "Metric '{}' references unknown percentile function '{function}'",
                definition.metric_name
            )));
        };

        if definition.parameters.as_slice() != metric.roles {
            let expected: Vec<&str> = metric.roles.iter().map(ParameterRole::as_str).collect();
            let got: Vec<&str> = definition
                .parameters
                .iter()
                .map(ParameterRole::as_str)
                .collect();
            warn!(metric = %definition.metric_name, function = %function, "parameter roles do not match");
            return Err(AppError::invalid_input(format!(
                "Metric '{}': '{function}' expects [{}], got [{}]",
                definition.metric_name,
                expected.join(", "),
                got.join(", ")
            )));
        }

        Ok(())
    }

    /// Registered metrics sorted by family then name
    #[must_use]
    pub fn metrics(&self) -> Vec<&RegisteredMetric> {
        let mut metrics: Vec<_> = self.metrics.values().collect();
        metrics.sort_by_key(|metric| (metric.family, metric.name));
        metrics
    }

    /// Whether a function name is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.metrics.contains_key(name)
    }

    /// Number of registered metrics
    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Defaults substituted for missing profile fields
    #[must_use]
    pub const fn defaults(&self) -> &ProfileDefaults {
        &self.context.defaults
    }
}
