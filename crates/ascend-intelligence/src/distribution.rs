// ABOUTME: Distribution synthesis from historical percentile samples for bell-curve display
// ABOUTME: Histogram plus Gaussian smoothing, or a canonical normal curve when samples are scarce
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! # Distribution Synthesis
//!
//! Produces a 101-bucket density (`curve`, peak scaled to 100) and its
//! cumulative sum (`cdf`, last bucket = 100) over the percentile axis.
//!
//! With fewer than `min_samples` finite samples the empirical shape is
//! meaningless, so a canonical normal density is returned instead.

use crate::config::intelligence::DistributionConfig;
use crate::percentile::normal::normal_pdf;
use ascend_core::constants::percentile::{BUCKETS, MAX};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a curve's shape came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveSource {
    /// Smoothed histogram of samples
    Empirical,
    /// Closed-form normal density
    Canonical,
}

/// Density and cumulative curve over percentile buckets `0..=100`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionCurve {
    /// Density per bucket, peak scaled to 100
    pub curve: Vec<f64>,
    /// Cumulative density per bucket, last bucket 100
    pub cdf: Vec<f64>,
    /// Empirical or canonical
    pub source: CurveSource,
    /// Finite samples used
    pub sample_count: usize,
}

impl DistributionCurve {
    /// Bucket holding the highest density (lowest index on ties)
    #[must_use]
    pub fn peak_bucket(&self) -> usize {
        self.curve
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |(best_i, best), (i, v)| {
                if *v > best {
                    (i, *v)
                } else {
                    (best_i, best)
                }
            })
            .0
    }
}

/// Build a display distribution from percentile samples
///
/// Non-finite samples are ignored; the rest are rounded and clamped into a
/// bucket.
#[must_use]
pub fn build_distribution(samples: &[f64], config: &DistributionConfig) -> DistributionCurve {
    let finite: Vec<f64> = samples.iter().copied().filter(|s| s.is_finite()).collect();
    if finite.len() < config.min_samples {
        debug!(
            samples = finite.len(),
            min_samples = config.min_samples,
            "too few samples, using canonical curve"
        );
        return DistributionCurve {
            sample_count: finite.len(),
            ..canonical_distribution(config)
        };
    }

    let mut histogram = vec![0.0; BUCKETS];
    for sample in &finite {
        let bucket = sample.round().clamp(0.0, MAX) as usize;
        histogram[bucket] += 1.0;
    }

    let smoothed = gaussian_smooth(&histogram, config.smoothing_sigma);
    DistributionCurve {
        curve: scale_to_peak(&smoothed),
        cdf: cumulative(&smoothed),
        source: CurveSource::Empirical,
        sample_count: finite.len(),
    }
}

/// Closed-form normal density over the percentile axis
#[must_use]
pub fn canonical_distribution(config: &DistributionConfig) -> DistributionCurve {
    let curve: Vec<f64> = (0..BUCKETS)
        .map(|i| {
            normal_pdf(i as f64, config.canonical_mean, config.canonical_std_dev)
                * config.canonical_scale
        })
        .collect();
    let cdf = cumulative(&curve);
    DistributionCurve {
        curve,
        cdf,
        source: CurveSource::Canonical,
        sample_count: 0,
    }
}

/// Symmetric Gaussian smoothing normalized by the weights actually in range
///
/// Kernel radius is `ceil(3 * sigma)`; edge buckets average over fewer
/// neighbours instead of treating out-of-range buckets as zero.
#[must_use]
pub fn gaussian_smooth(values: &[f64], sigma: f64) -> Vec<f64> {
    // Past the slice length a wider window adds no neighbours
    let radius = ((3.0 * sigma).ceil() as usize).min(values.len());
    let weights: Vec<f64> = (0..=radius)
        .map(|j| {
            let j = j as f64;
            (-(j * j) / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    (0..values.len())
        .map(|i| {
            let lo = i.saturating_sub(radius);
            let hi = i.saturating_add(radius).min(values.len().saturating_sub(1));
            let (sum, weight_sum) = (lo..=hi).fold((0.0, 0.0), |(sum, weight_sum), k| {
                let w = weights[i.abs_diff(k)];
                (w.mul_add(values[k], sum), weight_sum + w)
            });
            if weight_sum > 0.0 {
                sum / weight_sum
            } else {
                0.0
            }
        })
        .collect()
}

/// Running sum scaled so the last element is 100
#[must_use]
pub fn cumulative(values: &[f64]) -> Vec<f64> {
    let mut running = 0.0;
    let sums: Vec<f64> = values
        .iter()
        .map(|v| {
            running += v;
            running
        })
        .collect();
    let total = sums.last().copied().unwrap_or_default();
    if total > 0.0 {
        sums.iter().map(|s| s / total * MAX).collect()
    } else {
        sums
    }
}

fn scale_to_peak(values: &[f64]) -> Vec<f64> {
    let peak = values.iter().copied().fold(0.0, f64::max);
    if peak > 0.0 {
        values.iter().map(|v| v / peak * MAX).collect()
    } else {
        values.to_vec()
    }
}
