// ABOUTME: Normalization configuration for age and bodyweight adjustment of raw measurements
// ABOUTME: Holds the age factor step table and reference bodyweights for lift normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Normalization Configuration
//!
//! Age factors are a step table: the first step whose `below_age` exceeds the
//! user's age wins, otherwise `senior_factor` applies.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One step of the age factor table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeFactorStep {
    /// Exclusive upper age bound of this step
    pub below_age: u32,
    /// Multiplier applied to performance expectations for ages in this step
    pub factor: f64,
}

/// Age factor step table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeFactorTable {
    /// Steps in ascending `below_age` order
    pub steps: Vec<AgeFactorStep>,
    /// Factor for ages past the last step
    pub senior_factor: f64,
}

impl AgeFactorTable {
    /// Factor for an age in whole years
    #[must_use]
    pub fn factor_for(&self, age: u32) -> f64 {
        self.steps
            .iter()
            .find(|step| age < step.below_age)
            .map_or(self.senior_factor, |step| step.factor)
    }

    /// Check ordering and factor ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTable` if steps are unordered or a factor is
    /// not a positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .steps
            .windows(2)
            .any(|pair| pair[0].below_age >= pair[1].below_age)
        {
            return Err(ConfigError::InvalidTable(
                "age factor steps must have strictly increasing ages".into(),
            ));
        }
        let factors = self.steps.iter().map(|step| step.factor);
        if factors
            .chain([self.senior_factor])
            .any(|factor| !factor.is_finite() || factor <= 0.0)
        {
            return Err(ConfigError::InvalidTable(
                "age factors must be positive finite numbers".into(),
            ));
        }
        Ok(())
    }
}

impl Default for AgeFactorTable {
    fn default() -> Self {
        Self {
            steps: vec![
                AgeFactorStep {
                    below_age: 26,
                    factor: 1.00,
                },
                AgeFactorStep {
                    below_age: 36,
                    factor: 0.97,
                },
                AgeFactorStep {
                    below_age: 46,
                    factor: 0.93,
                },
                AgeFactorStep {
                    below_age: 56,
                    factor: 0.87,
                },
            ],
            senior_factor: 0.80,
        }
    }
}

/// Parses `26:1.0,36:0.97,*:0.80`; `*` marks the senior factor
impl FromStr for AgeFactorTable {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut steps = Vec::new();
        let mut senior_factor = None;

        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (age, factor) = entry
                .split_once(':')
                .ok_or_else(|| ConfigError::Parse(format!("age factor entry '{entry}'")))?;
            let factor: f64 = factor
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("age factor value '{factor}'")))?;
            if age.trim() == "*" {
                senior_factor = Some(factor);
            } else {
                let below_age = age
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("age factor bound '{age}'")))?;
                steps.push(AgeFactorStep { below_age, factor });
            }
        }

        let senior_factor = senior_factor.ok_or_else(|| {
            ConfigError::InvalidTable("age factor table needs a '*' fallback entry".into())
        })?;
        let table = Self {
            steps,
            senior_factor,
        };
        table.validate()?;
        Ok(table)
    }
}

impl fmt::Display for AgeFactorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{}:{},", step.below_age, step.factor)?;
        }
        write!(f, "*:{}", self.senior_factor)
    }
}

/// Normalization Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Age factor step table
    pub age_factors: AgeFactorTable,
    /// Bodyweight (lbs) at which compound lift ratios need no adjustment
    pub compound_reference_bodyweight_lbs: f64,
    /// Exponent applied to the compound reference/bodyweight quotient
    pub compound_bodyweight_exponent: f64,
    /// Bodyweight (lbs) at which isolation lift weights need no adjustment
    pub isolation_reference_bodyweight_lbs: f64,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            age_factors: AgeFactorTable::default(),
            compound_reference_bodyweight_lbs: 180.0,
            compound_bodyweight_exponent: 0.12,
            isolation_reference_bodyweight_lbs: 135.0,
        }
    }
}
