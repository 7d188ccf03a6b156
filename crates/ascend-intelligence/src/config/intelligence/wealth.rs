// ABOUTME: Wealth model configuration for the net worth and income percentile curves
// ABOUTME: Configures the log-normal body fraction and the income tail extension slope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use ascend_core::constants::percentile::EPSILON;
use serde::{Deserialize, Serialize};

/// Wealth Model Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthConfig {
    /// Share of the population described by the log-normal body (rest is Pareto tail)
    pub body_fraction: f64,
    /// Clamp distance for inverse-CDF arguments and log inputs
    pub epsilon: f64,
    /// Percentile points gained per dollar of income above the top breakpoint
    pub income_tail_slope: f64,
}

impl Default for WealthConfig {
    fn default() -> Self {
        Self {
            body_fraction: 0.98,
            epsilon: EPSILON,
            income_tail_slope: 1e-6,
        }
    }
}
