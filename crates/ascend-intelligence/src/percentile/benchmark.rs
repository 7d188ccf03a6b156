// ABOUTME: Validated benchmark curve pairing percentile anchors with raw values
// ABOUTME: Supports linear and log-space interpolation and rejects malformed tables at build time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use super::interpolation::{
    interpolate_log_percentile, interpolate_log_value, interpolate_percentile, interpolate_value,
};
use ascend_core::constants::percentile::{MAX, MIN, STANDARD_ANCHORS};
use serde::Serialize;
use thiserror::Error;

/// Reasons a benchmark table is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchmarkError {
    /// Fewer than two points
    #[error("benchmark table needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// Anchor and value counts differ
    #[error("{anchors} anchors but {values} values")]
    LengthMismatch {
        /// Anchor count
        anchors: usize,
        /// Value count
        values: usize,
    },

    /// Anchors not strictly increasing inside `[0, 100]`
    #[error("anchors must be strictly increasing within [0, 100]")]
    InvalidAnchors,

    /// Values decrease somewhere or are not finite
    #[error("values must be finite and non-decreasing (offending index {0})")]
    NotMonotonic(usize),

    /// A log-space table contains a value that is not positive
    #[error("log-space table contains non-positive value at index {0}")]
    NonPositiveLogValue(usize),
}

/// Space in which a curve interpolates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Interpolate raw values
    #[default]
    Linear,
    /// Interpolate natural logs of values
    Log,
}

/// Benchmark table bound to its percentile anchors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkCurve {
    anchors: Vec<f64>,
    values: Vec<f64>,
    scale: Scale,
}

impl BenchmarkCurve {
    /// Curve over arbitrary anchors
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError` when the table is too short, lengths differ,
    /// anchors are not strictly increasing in `[0, 100]`, or values decrease.
    pub fn with_anchors(anchors: &[f64], values: &[f64]) -> Result<Self, BenchmarkError> {
        if values.len() < 2 {
            return Err(BenchmarkError::TooFewPoints(values.len()));
        }
        if anchors.len() != values.len() {
            return Err(BenchmarkError::LengthMismatch {
                anchors: anchors.len(),
                values: values.len(),
            });
        }
        let anchors_ok = anchors.iter().all(|a| (MIN..=MAX).contains(a))
            && anchors.windows(2).all(|pair| pair[0] < pair[1]);
        if !anchors_ok {
            return Err(BenchmarkError::InvalidAnchors);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(BenchmarkError::NotMonotonic(index));
        }
        if let Some(index) = values.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(BenchmarkError::NotMonotonic(index + 1));
        }

        Ok(Self {
            anchors: anchors.to_vec(),
            values: values.to_vec(),
            scale: Scale::Linear,
        })
    }

    /// Curve over the standard anchors `[1, 10, 25, 50, 75, 90, 99]`
    ///
    /// # Errors
    ///
    /// Same as [`Self::with_anchors`]; the table must have exactly seven values.
    pub fn standard(values: &[f64]) -> Result<Self, BenchmarkError> {
        Self::with_anchors(&STANDARD_ANCHORS, values)
    }

    /// Curve whose anchors are spread evenly over `0..=100`
    ///
    /// Anchor `i` of `n` sits at `i / (n - 1) * 100`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::with_anchors`].
    pub fn uniform(values: &[f64]) -> Result<Self, BenchmarkError> {
        if values.len() < 2 {
            return Err(BenchmarkError::TooFewPoints(values.len()));
        }
        Self::with_anchors(&uniform_anchors(values.len()), values)
    }

    /// Switch the curve to log-space interpolation
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError::NonPositiveLogValue` if any value is `<= 0`.
    pub fn log_scale(mut self) -> Result<Self, BenchmarkError> {
        if let Some(index) = self.values.iter().position(|v| *v <= 0.0) {
            return Err(BenchmarkError::NonPositiveLogValue(index));
        }
        self.scale = Scale::Log;
        Ok(self)
    }

    /// Percentile of a raw value, saturating at the end anchors
    #[must_use]
    pub fn percentile_at(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Linear => interpolate_percentile(value, &self.anchors, &self.values),
            Scale::Log => interpolate_log_percentile(value, &self.anchors, &self.values),
        }
    }

    /// Raw value at a percentile, saturating at the end values
    #[must_use]
    pub fn value_at(&self, percentile: f64) -> f64 {
        match self.scale {
            Scale::Linear => interpolate_value(percentile, &self.anchors, &self.values),
            Scale::Log => interpolate_log_value(percentile, &self.anchors, &self.values),
        }
    }

    /// Percentile anchors
    #[must_use]
    pub fn anchors(&self) -> &[f64] {
        &self.anchors
    }

    /// Raw values at each anchor
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Interpolation space
    #[must_use]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Lowest anchor
    #[must_use]
    pub fn min_percentile(&self) -> f64 {
        self.anchors.first().copied().unwrap_or(MIN)
    }

    /// Highest anchor
    #[must_use]
    pub fn max_percentile(&self) -> f64 {
        self.anchors.last().copied().unwrap_or(MAX)
    }

    /// Highest tabulated value
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.values.last().copied().unwrap_or_default()
    }
}

/// Evenly spaced anchors `i / (n - 1) * 100` for `i in 0..n`
#[must_use]
pub fn uniform_anchors(n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![MIN; n];
    }
    let last = (n - 1) as f64;
    (0..n).map(|i| i as f64 / last * MAX).collect()
}
