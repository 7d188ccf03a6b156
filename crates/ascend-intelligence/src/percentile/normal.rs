// ABOUTME: Normal distribution helpers: polynomial CDF, density, and inverse via erf_inv
// ABOUTME: Shared by IQ-style metrics, the log-normal net worth body and the canonical curve
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Normal distribution approximations
//!
//! The CDF is the Abramowitz & Stegun 26.2.17 polynomial (absolute error
//! below 7.5e-8). The inverse goes through Giles' single-precision `erf_inv`.

use std::f64::consts::{PI, SQRT_2};

/// Standard normal CDF `Φ(z)`
#[must_use]
pub fn cumulative_normal(z: f64) -> f64 {
    let t = 1.0 / 0.231_641_9_f64.mul_add(z.abs(), 1.0);
    let d = 0.398_942_3 * (-z * z / 2.0).exp();
    let poly = t.mul_add(1.330_274, -1.821_256);
    let poly = t.mul_add(poly, 1.781_478);
    let poly = t.mul_add(poly, -0.356_563_8);
    let poly = t.mul_add(poly, 0.319_381_5);
    let tail = d * t * poly;
    if z > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// CDF of `N(mean, std_dev²)` at `x`
#[must_use]
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    cumulative_normal((x - mean) / std_dev)
}

/// Density of `N(mean, std_dev²)` at `x`
#[must_use]
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}

/// Inverse error function on `(-1, 1)`
///
/// Returns `±inf` at the boundaries and NaN outside them.
#[must_use]
pub fn erf_inv(x: f64) -> f64 {
    if x.is_nan() || x.abs() > 1.0 {
        return f64::NAN;
    }
    let w = -((1.0 - x) * (1.0 + x)).ln();
    let p = if w < 5.0 {
        horner(
            w - 2.5,
            &[
                2.810_226_36e-08,
                3.432_739_39e-07,
                -3.523_387_7e-06,
                -4.391_506_54e-06,
                0.000_218_580_87,
                -0.001_253_725_03,
                -0.004_177_681_64,
                0.246_640_727,
                1.501_409_41,
            ],
        )
    } else {
        horner(
            w.sqrt() - 3.0,
            &[
                -0.000_200_214_257,
                0.000_100_950_558,
                0.001_349_343_22,
                -0.003_673_428_44,
                0.005_739_507_73,
                -0.007_622_461_3,
                0.009_438_870_47,
                1.001_674_06,
                2.832_976_82,
            ],
        )
    };
    p * x
}

/// Standard normal quantile `Φ⁻¹(u)` with `u` clamped to `[epsilon, 1 - epsilon]`
#[must_use]
pub fn inverse_standard_normal(u: f64, epsilon: f64) -> f64 {
    let u = if u.is_nan() { 0.5 } else { u.clamp(epsilon, 1.0 - epsilon) };
    SQRT_2 * erf_inv(2.0f64.mul_add(u, -1.0))
}

/// Evaluate a polynomial given highest-degree coefficient first
fn horner(x: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .fold(0.0, |acc, coefficient| acc.mul_add(x, *coefficient))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_symmetry_and_center() {
        assert!((cumulative_normal(0.0) - 0.5).abs() < 1e-6);
        for z in [0.3, 1.0, 1.96, 3.2] {
            let sum = cumulative_normal(z) + cumulative_normal(-z);
            assert!((sum - 1.0).abs() < 1e-7);
        }
        assert!((cumulative_normal(1.96) - 0.975).abs() < 1e-4);
    }

    #[test]
    fn test_erf_inv_known_points() {
        assert!(erf_inv(0.0).abs() < 1e-12);
        // erf(0.5) = 0.520499877813
        assert!((erf_inv(0.520_499_877_813) - 0.5).abs() < 1e-6);
        assert!((erf_inv(-0.520_499_877_813) + 0.5).abs() < 1e-6);
        assert!(erf_inv(1.5).is_nan());
    }

    #[test]
    fn test_inverse_normal_round_trip() {
        for u in [0.001, 0.05, 0.3, 0.5, 0.8, 0.975, 0.999] {
            let z = inverse_standard_normal(u, 1e-6);
            assert!((cumulative_normal(z) - u).abs() < 1e-5, "u={u}");
        }
    }

    #[test]
    fn test_inverse_normal_clamps_extremes() {
        let low = inverse_standard_normal(0.0, 1e-6);
        let high = inverse_standard_normal(1.0, 1e-6);
        assert!(low.is_finite() && high.is_finite());
        assert!((low + high).abs() < 1e-6);
        assert!(low < -4.0);
    }

    #[test]
    fn test_pdf_peaks_at_mean() {
        let peak = normal_pdf(50.0, 50.0, 15.0);
        assert!(peak > normal_pdf(49.0, 50.0, 15.0));
        assert!((normal_pdf(35.0, 50.0, 15.0) - normal_pdf(65.0, 50.0, 15.0)).abs() < 1e-15);
    }
}
