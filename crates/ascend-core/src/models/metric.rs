// ABOUTME: Metric definition, parameter role and percentile sample models
// ABOUTME: Describes how a trackable quantity maps onto a registered percentile function
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use super::category::CategoryPath;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Role a positional argument plays in a percentile function call
///
/// Older metric definitions name the measured quantity after what it is
/// (`weight`, `minutes`, `eqScore`); those names deserialize to `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterRole {
    /// The raw measurement itself
    #[serde(alias = "weight", alias = "minutes", alias = "eqScore", alias = "score")]
    Value,
    /// User age in years
    Age,
    /// User sex
    Gender,
    /// User bodyweight
    Bodyweight,
}

impl ParameterRole {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Bodyweight => "bodyweight",
        }
    }
}

impl fmt::Display for ParameterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trackable quantity owned by a category
///
/// When `percentile_function` is absent the metric is manual-entry only and the
/// engine never computes a percentile for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Opaque identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Owning category, e.g. `physical.strength`
    pub category_path: CategoryPath,
    /// Display and lookup name, e.g. "Bench Press"
    pub metric_name: String,
    /// Display unit
    #[serde(default)]
    pub unit: String,
    /// Registry key of the percentile function, if any
    #[serde(default, alias = "percentile_function_name")]
    pub percentile_function: Option<String>,
    /// Ordered call signature of the percentile function
    #[serde(default)]
    pub parameters: Vec<ParameterRole>,
}

impl MetricDefinition {
    /// Create a manual-entry metric definition
    pub fn new(
        category_path: CategoryPath,
        metric_name: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_path,
            metric_name: metric_name.into(),
            unit: unit.into(),
            percentile_function: None,
            parameters: Vec::new(),
        }
    }

    /// Bind a percentile function and its parameter roles
    #[must_use]
    pub fn with_function(
        mut self,
        function_name: impl Into<String>,
        parameters: impl IntoIterator<Item = ParameterRole>,
    ) -> Self {
        self.percentile_function = Some(function_name.into());
        self.parameters = parameters.into_iter().collect();
        self
    }

    /// Whether the metric's percentile is entered by hand
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        self.percentile_function.is_none()
    }

    /// Check the parameter list on its own, without consulting a registry
    ///
    /// # Errors
    ///
    /// Returns `AppError` when a function is bound but the parameter list is
    /// empty, repeats a role, or does not lead with `value`.
    pub fn validate_shape(&self) -> AppResult<()> {
        let Some(function) = &self.percentile_function else {
            return Ok(());
        };

        if self.parameters.is_empty() {
            return Err(AppError::invalid_input(format!(
                "Metric '{}' binds '{function}' but declares no parameters",
                self.metric_name
            )));
        }

        if self.parameters.first() != Some(&ParameterRole::Value) {
            return Err(AppError::invalid_input(format!(
                "Metric '{}': first parameter of '{function}' must be 'value'",
                self.metric_name
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.parameters.iter().find(|role| !seen.insert(**role)) {
            return Err(AppError::invalid_input(format!(
                "Metric '{}': parameter '{dup}' listed more than once",
                self.metric_name
            )));
        }

        Ok(())
    }
}

/// An observed measurement with its computed (or hand-entered) percentile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileSample {
    /// Raw measured value
    pub value: f64,
    /// Percentile on the 0-100 scale, absent when none was recorded
    pub percentile: Option<f64>,
    /// When the measurement was recorded
    pub recorded_at: DateTime<Utc>,
}

impl PercentileSample {
    /// Create a sample with a known percentile
    #[must_use]
    pub const fn new(value: f64, percentile: f64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            value,
            percentile: Some(percentile),
            recorded_at,
        }
    }
}
