// ABOUTME: Net worth and income percentile models keyed by age cohort
// ABOUTME: Log-normal body spliced to a Pareto tail for net worth, breakpoint table for income
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Wealth models
//!
//! Net worth follows a log-normal distribution for the bottom `body_fraction`
//! of the population and a Pareto tail above it. The two pieces are joined at
//! the quantile level, not the value level, so the inverse mapping is only
//! exact where the body's value range stays below the Pareto scale.

use super::benchmark::{BenchmarkCurve, BenchmarkError};
use super::clamp_percentile;
use super::normal::{cumulative_normal, inverse_standard_normal};
use crate::config::intelligence::WealthConfig;
use ascend_core::constants::percentile::{MAX, MIN};
use ascend_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age cohort selecting net worth parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Under 30
    #[serde(rename = "20s")]
    Twenties,
    /// 30 to 39
    #[serde(rename = "30s")]
    Thirties,
    /// 40 to 49
    #[serde(rename = "40s")]
    Forties,
    /// 50 to 59
    #[serde(rename = "50s")]
    Fifties,
    /// 60 and over
    #[serde(rename = "60s")]
    Sixties,
}

impl AgeGroup {
    /// Every cohort, youngest first
    pub const ALL: [Self; 5] = [
        Self::Twenties,
        Self::Thirties,
        Self::Forties,
        Self::Fifties,
        Self::Sixties,
    ];

    /// Cohort for an age in whole years
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        match age {
            0..=29 => Self::Twenties,
            30..=39 => Self::Thirties,
            40..=49 => Self::Forties,
            50..=59 => Self::Fifties,
            _ => Self::Sixties,
        }
    }

    /// Label such as `30s`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Twenties => "20s",
            Self::Thirties => "30s",
            Self::Forties => "40s",
            Self::Fifties => "50s",
            Self::Sixties => "60s",
        }
    }

    /// Distribution parameters for this cohort
    #[must_use]
    pub const fn params(&self) -> NetWorthParams {
        match self {
            Self::Twenties => NetWorthParams::new(11.2, 1.45, 2.2, 250_000.0),
            Self::Thirties => NetWorthParams::new(12.0, 1.30, 2.0, 600_000.0),
            Self::Forties => NetWorthParams::new(12.7, 1.15, 1.85, 1_000_000.0),
            Self::Fifties => NetWorthParams::new(13.2, 1.05, 1.75, 1_800_000.0),
            Self::Sixties => NetWorthParams::new(13.3, 1.00, 1.70, 2_200_000.0),
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown age group: '{s}'. Valid options: 20s, 30s, 40s, 50s, 60s"
                ))
            })
    }
}

/// Log-normal body and Pareto tail parameters of one cohort
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetWorthParams {
    /// Mean of `ln(net worth)` in the body
    pub mu: f64,
    /// Standard deviation of `ln(net worth)` in the body
    pub sigma: f64,
    /// Pareto shape
    pub alpha: f64,
    /// Pareto scale (minimum tail value)
    pub scale: f64,
}

impl NetWorthParams {
    const fn new(mu: f64, sigma: f64, alpha: f64, scale: f64) -> Self {
        Self {
            mu,
            sigma,
            alpha,
            scale,
        }
    }
}

/// Spliced log-normal/Pareto net worth model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetWorthModel {
    body_fraction: f64,
    epsilon: f64,
}

impl NetWorthModel {
    /// Build from configuration
    #[must_use]
    pub const fn new(config: &WealthConfig) -> Self {
        Self {
            body_fraction: config.body_fraction,
            epsilon: config.epsilon,
        }
    }

    /// Net worth (dollars) at a percentile for a cohort
    #[must_use]
    pub fn value_at(&self, percentile: f64, group: AgeGroup) -> f64 {
        let params = group.params();
        let u = clamp_percentile(percentile) / MAX;

        if u < self.body_fraction {
            let body_u = u / self.body_fraction;
            let z = inverse_standard_normal(body_u, self.epsilon);
            params.sigma.mul_add(z, params.mu).exp()
        } else {
            let tail_u = ((u - self.body_fraction) / (1.0 - self.body_fraction))
                .clamp(0.0, 1.0 - self.epsilon);
            params.scale / (1.0 - tail_u).powf(1.0 / params.alpha)
        }
    }

    /// Percentile of a net worth for a cohort
    ///
    /// Non-positive net worth maps to the bottom of the scale.
    #[must_use]
    pub fn percentile_of(&self, net_worth: f64, group: AgeGroup) -> f64 {
        let params = group.params();
        if net_worth.is_nan() {
            return MIN;
        }

        let u = if net_worth < params.scale {
            let z = (net_worth.max(self.epsilon).ln() - params.mu) / params.sigma;
            self.body_fraction * cumulative_normal(z)
        } else {
            let tail = 1.0 - (params.scale / net_worth).powf(params.alpha);
            (1.0 - self.body_fraction).mul_add(tail, self.body_fraction)
        };
        clamp_percentile(u * MAX)
    }
}

impl Default for NetWorthModel {
    fn default() -> Self {
        Self::new(&WealthConfig::default())
    }
}

/// Top income breakpoint
const INCOME_TOP: f64 = 500_000.0;

/// Income breakpoints: annual income observed at each percentile
const INCOME_ANCHORS: [f64; 8] = [0.0, 10.0, 25.0, 50.0, 75.0, 90.0, 95.0, 99.0];
const INCOME_VALUES: [f64; 8] = [
    0.0, 12_000.0, 28_000.0, 52_000.0, 90_000.0, 145_000.0, 200_000.0, INCOME_TOP,
];

/// Income percentile model
///
/// Between breakpoints the mapping is linear. Above the top breakpoint each
/// extra dollar adds `tail_slope` percentile points until 100.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeModel {
    curve: BenchmarkCurve,
    tail_slope: f64,
}

impl IncomeModel {
    /// Build from configuration
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError` if the breakpoint table is malformed
    pub fn new(config: &WealthConfig) -> Result<Self, BenchmarkError> {
        Ok(Self {
            curve: BenchmarkCurve::with_anchors(&INCOME_ANCHORS, &INCOME_VALUES)?,
            tail_slope: config.income_tail_slope,
        })
    }

    /// Percentile of an annual income
    #[must_use]
    pub fn percentile_of(&self, income: f64) -> f64 {
        let top = self.curve.max_value();
        if income > top {
            let extra = (income - top) * self.tail_slope;
            return (self.curve.max_percentile() + extra).min(MAX);
        }
        self.curve.percentile_at(income)
    }

    /// Annual income at a percentile
    #[must_use]
    pub fn value_at(&self, percentile: f64) -> f64 {
        let percentile = clamp_percentile(percentile);
        let top_percentile = self.curve.max_percentile();
        if percentile > top_percentile {
            return self.curve.max_value() + (percentile - top_percentile) / self.tail_slope;
        }
        self.curve.value_at(percentile)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_boundaries() {
        assert_eq!(AgeGroup::from_age(29), AgeGroup::Twenties);
        assert_eq!(AgeGroup::from_age(30), AgeGroup::Thirties);
        assert_eq!(AgeGroup::from_age(59), AgeGroup::Fifties);
        assert_eq!(AgeGroup::from_age(60), AgeGroup::Sixties);
        assert_eq!("40S".parse::<AgeGroup>().unwrap(), AgeGroup::Forties);
        assert!("70s".parse::<AgeGroup>().is_err());
    }

    #[test]
    fn test_median_is_near_body_median() {
        let model = NetWorthModel::default();
        let median = model.value_at(50.0, AgeGroup::Thirties);
        // Body quantile 0.5/0.98 sits slightly above the log-normal median
        assert!(median > 12f64.exp());
        assert!(median < 12f64.exp() * 1.1);
    }

    #[test]
    fn test_tail_exceeds_scale() {
        let model = NetWorthModel::default();
        let top = model.value_at(99.5, AgeGroup::Thirties);
        assert!(top > 600_000.0);
        assert!(top > 5.0 * model.value_at(50.0, AgeGroup::Thirties));
    }

    #[test]
    fn test_percentile_bounds() {
        let model = NetWorthModel::default();
        assert!(model.percentile_of(-50_000.0, AgeGroup::Twenties) < 0.001);
        assert!(model.percentile_of(1e12, AgeGroup::Sixties) <= 100.0);
        assert!(model.value_at(100.0, AgeGroup::Sixties).is_finite());
        assert!(model.value_at(0.0, AgeGroup::Sixties) > 0.0);
    }

    #[test]
    fn test_income_breakpoints_and_tail() {
        let model = IncomeModel::new(&WealthConfig::default()).unwrap();
        assert!((model.percentile_of(52_000.0) - 50.0).abs() < 1e-9);
        assert!((model.percentile_of(40_000.0) - 37.5).abs() < 1e-9);
        assert!((model.percentile_of(1_000_000.0) - 99.5).abs() < 1e-9);
        assert!((model.percentile_of(10_000_000.0) - 100.0).abs() < f64::EPSILON);
        assert!((model.value_at(99.5) - 1_000_000.0).abs() < 1e-3);
        assert!(model.percentile_of(-10.0).abs() < f64::EPSILON);
    }
}
