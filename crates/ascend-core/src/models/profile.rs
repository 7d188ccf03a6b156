// ABOUTME: User profile model consumed by percentile calculations
// ABOUTME: Gender, WeightUnit and UserProfile with pound conversion helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use crate::constants::units::LBS_PER_KG;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used to select sex-specific benchmark curves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male benchmark curves
    #[default]
    Male,
    /// Female benchmark curves
    Female,
}

impl Gender {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Unit the profile's bodyweight (and lift weights) are recorded in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Pounds (the unit benchmark reference bodyweights are expressed in)
    #[default]
    #[serde(alias = "lb", alias = "lbs")]
    Pounds,
    /// Kilograms
    #[serde(alias = "kg")]
    Kilograms,
}

impl WeightUnit {
    /// Convert a weight in this unit to pounds
    #[must_use]
    pub fn to_pounds(self, weight: f64) -> f64 {
        match self {
            Self::Pounds => weight,
            Self::Kilograms => weight * LBS_PER_KG,
        }
    }

    /// Convert a weight in pounds back into this unit
    #[must_use]
    pub fn from_pounds(self, pounds: f64) -> f64 {
        match self {
            Self::Pounds => pounds,
            Self::Kilograms => pounds / LBS_PER_KG,
        }
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" | "pounds" => Ok(Self::Pounds),
            "kg" | "kgs" | "kilograms" => Ok(Self::Kilograms),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit: '{other}'. Valid options: lbs, kg"
            ))),
        }
    }
}

/// Per-call snapshot of the user attributes a percentile function may consume
///
/// Every field is optional: the application shell supplies what it has and the
/// engine substitutes documented defaults for anything a metric needs.
///
/// # Examples
///
/// ```rust
/// use ascend_core::models::{Gender, UserProfile};
///
/// let profile = UserProfile::new()
///     .with_age(34)
///     .with_gender(Gender::Female)
///     .with_bodyweight(140.0);
/// assert_eq!(profile.bodyweight_lbs(), Some(140.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in whole years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Sex used for sex-specific curves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Bodyweight in `bodyweight_unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bodyweight: Option<f64>,
    /// Unit of `bodyweight` and of lift weights
    #[serde(default)]
    pub bodyweight_unit: WeightUnit,
}

impl UserProfile {
    /// Empty profile; every field falls back to defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Set bodyweight in the profile's unit
    #[must_use]
    pub const fn with_bodyweight(mut self, bodyweight: f64) -> Self {
        self.bodyweight = Some(bodyweight);
        self
    }

    /// Set the weight unit
    #[must_use]
    pub const fn with_unit(mut self, unit: WeightUnit) -> Self {
        self.bodyweight_unit = unit;
        self
    }

    /// Bodyweight converted to pounds, ignoring non-positive or non-finite values
    #[must_use]
    pub fn bodyweight_lbs(&self) -> Option<f64> {
        self.bodyweight
            .filter(|bw| bw.is_finite() && *bw > 0.0)
            .map(|bw| self.bodyweight_unit.to_pounds(bw))
    }
}
