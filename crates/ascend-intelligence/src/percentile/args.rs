// ABOUTME: Typed argument assembly for registered percentile functions
// ABOUTME: Maps parameter roles onto per-family argument structs with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use ascend_core::constants::profile_defaults;
use ascend_core::models::{Gender, ParameterRole, UserProfile, WeightUnit};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Defaults substituted for missing profile fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    /// Age in years
    pub age: u32,
    /// Bodyweight in pounds
    pub bodyweight_lbs: f64,
    /// Gender
    pub gender: Gender,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            age: profile_defaults::AGE,
            bodyweight_lbs: profile_defaults::BODYWEIGHT_LBS,
            gender: Gender::Male,
        }
    }
}

/// Arguments to a registered percentile function
///
/// Only `value` is mandatory. `value` and `bodyweight` are expressed in
/// `unit` for weight-based metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricArgs {
    /// Raw measurement
    pub value: f64,
    /// Age in years
    pub age: Option<u32>,
    /// Gender
    pub gender: Option<Gender>,
    /// Bodyweight in `unit`
    pub bodyweight: Option<f64>,
    /// Unit of weight-valued fields
    pub unit: WeightUnit,
}

impl MetricArgs {
    /// Arguments carrying only a value
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            age: None,
            gender: None,
            bodyweight: None,
            unit: WeightUnit::default(),
        }
    }

    /// Set age
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set bodyweight
    #[must_use]
    pub const fn with_bodyweight(mut self, bodyweight: f64) -> Self {
        self.bodyweight = Some(bodyweight);
        self
    }

    /// Set weight unit
    #[must_use]
    pub const fn with_unit(mut self, unit: WeightUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Pull exactly the fields named by `roles` out of a profile
    #[must_use]
    pub fn from_profile(value: f64, profile: &UserProfile, roles: &[ParameterRole]) -> Self {
        let mut args = Self::new(value).with_unit(profile.bodyweight_unit);
        for role in roles {
            match role {
                ParameterRole::Value => {}
                ParameterRole::Age => args.age = profile.age,
                ParameterRole::Gender => args.gender = profile.gender,
                ParameterRole::Bodyweight => args.bodyweight = profile.bodyweight,
            }
        }
        args
    }

    pub(crate) fn age_or(&self, defaults: &ProfileDefaults) -> u32 {
        self.age.unwrap_or_else(|| {
            debug!(default = defaults.age, "age missing, using default");
            defaults.age
        })
    }

    pub(crate) fn gender_or(&self, defaults: &ProfileDefaults) -> Gender {
        self.gender.unwrap_or_else(|| {
            debug!(default = %defaults.gender, "gender missing, using default");
            defaults.gender
        })
    }

    pub(crate) fn bodyweight_lbs_or(&self, defaults: &ProfileDefaults) -> f64 {
        self.bodyweight
            .filter(|bw| bw.is_finite() && *bw > 0.0)
            .map_or_else(
                || {
                    debug!(
                        default = defaults.bodyweight_lbs,
                        "bodyweight missing or invalid, using default"
                    );
                    defaults.bodyweight_lbs
                },
                |bw| self.unit.to_pounds(bw),
            )
    }
}

/// Lift inputs normalized against bodyweight and age
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LiftArgs {
    pub weight_lbs: f64,
    pub bodyweight_lbs: f64,
    pub age: u32,
    pub unit: WeightUnit,
}

impl LiftArgs {
    pub(crate) fn resolve(args: &MetricArgs, defaults: &ProfileDefaults) -> Self {
        Self {
            weight_lbs: args.unit.to_pounds(args.value),
            bodyweight_lbs: args.bodyweight_lbs_or(defaults),
            age: args.age_or(defaults),
            unit: args.unit,
        }
    }
}

/// Race inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RaceArgs {
    pub minutes: f64,
    pub age: u32,
    pub gender: Gender,
}

impl RaceArgs {
    pub(crate) fn resolve(args: &MetricArgs, defaults: &ProfileDefaults) -> Self {
        Self {
            minutes: args.value,
            age: args.age_or(defaults),
            gender: args.gender_or(defaults),
        }
    }
}

/// Age-cohort inputs for wealth metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CohortArgs {
    pub value: f64,
    pub age: u32,
}

impl CohortArgs {
    pub(crate) fn resolve(args: &MetricArgs, defaults: &ProfileDefaults) -> Self {
        Self {
            value: args.value,
            age: args.age_or(defaults),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_profile_only_copies_declared_roles() {
        let profile = UserProfile::new()
            .with_age(41)
            .with_gender(Gender::Female)
            .with_bodyweight(150.0);
        let args = MetricArgs::from_profile(
            100.0,
            &profile,
            &[ParameterRole::Value, ParameterRole::Bodyweight],
        );
        assert_eq!(args.age, None);
        assert_eq!(args.gender, None);
        assert_eq!(args.bodyweight, Some(150.0));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let defaults = ProfileDefaults::default();
        let args = MetricArgs::new(225.0).with_bodyweight(-3.0);
        let lift = LiftArgs::resolve(&args, &defaults);
        assert_eq!(lift.age, 30);
        assert!((lift.bodyweight_lbs - 180.0).abs() < f64::EPSILON);
        assert_eq!(RaceArgs::resolve(&args, &defaults).gender, Gender::Male);
    }

    #[test]
    fn test_kilograms_convert_to_pounds() {
        let defaults = ProfileDefaults::default();
        let args = MetricArgs::new(100.0)
            .with_bodyweight(80.0)
            .with_unit(WeightUnit::Kilograms);
        let lift = LiftArgs::resolve(&args, &defaults);
        assert!((lift.weight_lbs - 220.462_262_18).abs() < 1e-6);
        assert!((lift.bodyweight_lbs - 176.369_809_744).abs() < 1e-6);
    }
}
