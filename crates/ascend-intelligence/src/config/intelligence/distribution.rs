// ABOUTME: Distribution curve configuration for histogram smoothing and canonical fallback
// ABOUTME: Configures Gaussian sigma, minimum sample count, and the canonical normal curve
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use serde::{Deserialize, Serialize};

/// Widest accepted smoothing sigma, in buckets
pub const MAX_SMOOTHING_SIGMA: f64 = 100.0;

/// Distribution Curve Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Gaussian kernel standard deviation in percentile buckets
    pub smoothing_sigma: f64,
    /// Fewer usable samples than this yields the canonical curve
    pub min_samples: usize,
    /// Mean of the canonical normal curve
    pub canonical_mean: f64,
    /// Standard deviation of the canonical normal curve
    pub canonical_std_dev: f64,
    /// Multiplier applied to the canonical density
    pub canonical_scale: f64,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            smoothing_sigma: 1.0,
            min_samples: 5,
            canonical_mean: 50.0,
            canonical_std_dev: 15.0,
            canonical_scale: 100.0,
        }
    }
}
