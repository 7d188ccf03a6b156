// ABOUTME: Piecewise-linear conversion between raw values and percentiles over benchmark anchors
// ABOUTME: Forward and inverse kernels in linear and log space with saturation at the extremes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Interpolation kernel
//!
//! A benchmark table lists the raw values observed at fixed percentile
//! anchors. Between anchors the mapping is linear; outside the table it
//! saturates at the first or last anchor, so the kernel never extrapolates.
//!
//! The kernel assumes a table that is non-decreasing in value. Metrics where a
//! lower raw value is better keep an ascending table and invert the result
//! (`100 - p`) at the call site.

use super::benchmark::uniform_anchors;
use ascend_core::constants::percentile::STANDARD_ANCHORS;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Anchors for a table of `len` values
///
/// Up to seven values take the leading standard anchors; longer tables are
/// legacy evenly spaced sets and take `i / (len - 1) * 100`.
fn anchors_for(len: usize) -> Cow<'static, [f64]> {
    if len <= STANDARD_ANCHORS.len() {
        Cow::Borrowed(&STANDARD_ANCHORS[..len])
    } else {
        Cow::Owned(uniform_anchors(len))
    }
}

/// Map a value onto the standard anchors `[1, 10, 25, 50, 75, 90, 99]`
///
/// `benchmarks` holds the value at each anchor. Shorter tables use the first
/// `benchmarks.len()` anchors; tables longer than seven points use evenly
/// spaced anchors instead.
///
/// ```rust
/// use ascend_intelligence::percentile::interpolation::percentile_from_value;
///
/// let table = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0];
/// assert!((percentile_from_value(35.0, &table) - 37.5).abs() < 1e-9);
/// assert!((percentile_from_value(5.0, &table) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn percentile_from_value(value: f64, benchmarks: &[f64]) -> f64 {
    interpolate_percentile(value, &anchors_for(benchmarks.len()), benchmarks)
}

/// Inverse of [`percentile_from_value`]
#[must_use]
pub fn value_from_percentile(percentile: f64, benchmarks: &[f64]) -> f64 {
    interpolate_value(percentile, &anchors_for(benchmarks.len()), benchmarks)
}

/// [`percentile_from_value`] computed on natural logs of value and benchmarks
///
/// Benchmarks must be positive. Non-positive values saturate at the lowest
/// anchor.
#[must_use]
pub fn log_percentile_from_value(value: f64, benchmarks: &[f64]) -> f64 {
    interpolate_log_percentile(value, &anchors_for(benchmarks.len()), benchmarks)
}

/// Inverse of [`log_percentile_from_value`]; interpolates in log space and
/// exponentiates the result
#[must_use]
pub fn log_value_from_percentile(percentile: f64, benchmarks: &[f64]) -> f64 {
    interpolate_log_value(percentile, &anchors_for(benchmarks.len()), benchmarks)
}

/// Forward kernel over arbitrary anchors
///
/// `anchors` must be strictly increasing and `values` non-decreasing, both of
/// equal length of at least one. NaN input saturates at the lowest anchor.
#[must_use]
pub fn interpolate_percentile(value: f64, anchors: &[f64], values: &[f64]) -> f64 {
    let (Some(&first_anchor), Some(&last_anchor)) = (anchors.first(), anchors.last()) else {
        return 0.0;
    };
    let (Some(&min_value), Some(&max_value)) = (values.first(), values.last()) else {
        return 0.0;
    };

    if value.is_nan() || value <= min_value {
        return first_anchor;
    }
    if value >= max_value {
        return last_anchor;
    }

    for (v, a) in values.windows(2).zip(anchors.windows(2)) {
        match value.partial_cmp(&v[1]) {
            Some(Ordering::Equal) => return a[1],
            Some(Ordering::Less) => {
                let t = (value - v[0]) / (v[1] - v[0]);
                return t.mul_add(a[1] - a[0], a[0]);
            }
            _ => {}
        }
    }

    last_anchor
}

/// Inverse kernel over arbitrary anchors
#[must_use]
pub fn interpolate_value(percentile: f64, anchors: &[f64], values: &[f64]) -> f64 {
    bracket_percentile(percentile, anchors, values, |lo, hi, t| {
        t.mul_add(hi - lo, lo)
    })
}

/// Forward kernel in log space
#[must_use]
pub fn interpolate_log_percentile(value: f64, anchors: &[f64], values: &[f64]) -> f64 {
    if value.is_nan() || value <= 0.0 {
        return anchors.first().copied().unwrap_or(0.0);
    }
    let logs: Vec<f64> = values.iter().map(|v| v.ln()).collect();
    interpolate_percentile(value.ln(), anchors, &logs)
}

/// Inverse kernel in log space
#[must_use]
pub fn interpolate_log_value(percentile: f64, anchors: &[f64], values: &[f64]) -> f64 {
    bracket_percentile(percentile, anchors, values, |lo, hi, t| {
        t.mul_add(hi.ln() - lo.ln(), lo.ln()).exp()
    })
}

/// Find the anchor pair around `percentile` and blend its values with `blend`
fn bracket_percentile(
    percentile: f64,
    anchors: &[f64],
    values: &[f64],
    blend: impl Fn(f64, f64, f64) -> f64,
) -> f64 {
    let (Some(&first_anchor), Some(&last_anchor)) = (anchors.first(), anchors.last()) else {
        return 0.0;
    };
    let (Some(&min_value), Some(&max_value)) = (values.first(), values.last()) else {
        return 0.0;
    };

    if percentile.is_nan() || percentile <= first_anchor {
        return min_value;
    }
    if percentile >= last_anchor {
        return max_value;
    }

    for (a, v) in anchors.windows(2).zip(values.windows(2)) {
        match percentile.partial_cmp(&a[1]) {
            Some(Ordering::Equal) => return v[1],
            Some(Ordering::Less) => {
                let t = (percentile - a[0]) / (a[1] - a[0]);
                return blend(v[0], v[1], t);
            }
            _ => {}
        }
    }

    max_value
}
