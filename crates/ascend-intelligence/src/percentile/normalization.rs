// ABOUTME: Age and bodyweight normalization of raw measurements before table lookup
// ABOUTME: Compound lifts use bodyweight ratios, isolation lifts absolute weight, race times age
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Normalization
//!
//! Each function maps a raw measurement onto the scale its benchmark table is
//! expressed in, and each has an inverse (`denormalize_*`) used when a
//! percentile is converted back into a raw target.
//!
//! | Kind | Normalized | Factor |
//! |------|-----------|--------|
//! | compound lift | `weight / bodyweight / (f_bw · f_age)` | `f_bw = (ref / bw)^0.12` |
//! | isolation lift | `weight / (f_bw · f_age)` | `f_bw = sqrt(bw / ref)` |
//! | race time | `minutes · f_age` | |

use crate::config::intelligence::NormalizationConfig;
use ascend_core::constants::percentile::EPSILON;

/// Age factor for an age in whole years
#[must_use]
pub fn age_factor(age: u32, config: &NormalizationConfig) -> f64 {
    config.age_factors.factor_for(age)
}

/// Bodyweight factor for compound lift ratios
#[must_use]
pub fn compound_bodyweight_factor(bodyweight_lbs: f64, config: &NormalizationConfig) -> f64 {
    (config.compound_reference_bodyweight_lbs / bodyweight_lbs.max(EPSILON))
        .powf(config.compound_bodyweight_exponent)
}

/// Bodyweight factor for isolation lift weights
#[must_use]
pub fn isolation_bodyweight_factor(bodyweight_lbs: f64, config: &NormalizationConfig) -> f64 {
    (bodyweight_lbs.max(EPSILON) / config.isolation_reference_bodyweight_lbs).sqrt()
}

/// Strength ratio adjusted for bodyweight and age
#[must_use]
pub fn normalize_compound(
    weight_lbs: f64,
    bodyweight_lbs: f64,
    age: u32,
    config: &NormalizationConfig,
) -> f64 {
    let ratio = weight_lbs / bodyweight_lbs.max(EPSILON);
    ratio / (compound_bodyweight_factor(bodyweight_lbs, config) * age_factor(age, config))
}

/// Lift weight (lbs) whose adjusted ratio equals `adjusted_ratio`
#[must_use]
pub fn denormalize_compound(
    adjusted_ratio: f64,
    bodyweight_lbs: f64,
    age: u32,
    config: &NormalizationConfig,
) -> f64 {
    adjusted_ratio
        * compound_bodyweight_factor(bodyweight_lbs, config)
        * age_factor(age, config)
        * bodyweight_lbs.max(EPSILON)
}

/// Isolation lift weight adjusted for bodyweight and age
#[must_use]
pub fn normalize_isolation(
    weight_lbs: f64,
    bodyweight_lbs: f64,
    age: u32,
    config: &NormalizationConfig,
) -> f64 {
    weight_lbs / (isolation_bodyweight_factor(bodyweight_lbs, config) * age_factor(age, config))
}

/// Lift weight (lbs) whose adjusted value equals `normalized`
#[must_use]
pub fn denormalize_isolation(
    normalized: f64,
    bodyweight_lbs: f64,
    age: u32,
    config: &NormalizationConfig,
) -> f64 {
    normalized * isolation_bodyweight_factor(bodyweight_lbs, config) * age_factor(age, config)
}

/// Race time scaled onto the open-age table
///
/// Older runners get a smaller adjusted time, which the ascending
/// lower-is-better table rewards.
#[must_use]
pub fn normalize_race_time(minutes: f64, age: u32, config: &NormalizationConfig) -> f64 {
    minutes * age_factor(age, config)
}

/// Raw race time whose adjusted time equals `adjusted_minutes`
#[must_use]
pub fn denormalize_race_time(adjusted_minutes: f64, age: u32, config: &NormalizationConfig) -> f64 {
    adjusted_minutes / age_factor(age, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_factor_steps() {
        let config = NormalizationConfig::default();
        assert!((age_factor(18, &config) - 1.0).abs() < f64::EPSILON);
        assert!((age_factor(25, &config) - 1.0).abs() < f64::EPSILON);
        assert!((age_factor(26, &config) - 0.97).abs() < f64::EPSILON);
        assert!((age_factor(45, &config) - 0.93).abs() < f64::EPSILON);
        assert!((age_factor(55, &config) - 0.87).abs() < f64::EPSILON);
        assert!((age_factor(56, &config) - 0.80).abs() < f64::EPSILON);
        assert!((age_factor(90, &config) - 0.80).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reference_bodyweights_are_neutral() {
        let config = NormalizationConfig::default();
        assert!((compound_bodyweight_factor(180.0, &config) - 1.0).abs() < 1e-12);
        assert!((isolation_bodyweight_factor(135.0, &config) - 1.0).abs() < 1e-12);
        assert!((normalize_compound(180.0, 180.0, 25, &config) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_heavier_lifter_needs_more_weight() {
        let config = NormalizationConfig::default();
        let light = normalize_isolation(40.0, 135.0, 25, &config);
        let heavy = normalize_isolation(40.0, 240.0, 25, &config);
        assert!(heavy < light);
    }

    #[test]
    fn test_denormalize_inverts_normalize() {
        let config = NormalizationConfig::default();
        let adjusted = normalize_compound(225.0, 200.0, 40, &config);
        assert!((denormalize_compound(adjusted, 200.0, 40, &config) - 225.0).abs() < 1e-9);
        let adjusted = normalize_isolation(35.0, 150.0, 60, &config);
        assert!((denormalize_isolation(adjusted, 150.0, 60, &config) - 35.0).abs() < 1e-9);
        let adjusted = normalize_race_time(27.5, 50, &config);
        assert!((denormalize_race_time(adjusted, 50, &config) - 27.5).abs() < 1e-9);
    }
}
