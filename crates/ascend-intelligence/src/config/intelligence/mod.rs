// ABOUTME: Percentile engine configuration with environment overrides and validation
// ABOUTME: Groups normalization, wealth, distribution and trend settings under one struct
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Intelligence Configuration
//!
//! All tunable constants of the percentile engine live here. Benchmark tables
//! themselves are compiled in; only the adjustments around them are tunable.

/// Distribution curve settings
pub mod distribution;
/// Configuration error types
pub mod error;
/// Age and bodyweight normalization settings
pub mod normalization;
/// Zone, goal and scoring thresholds
pub mod trends;
/// Net worth and income model settings
pub mod wealth;

pub use distribution::{DistributionConfig, MAX_SMOOTHING_SIGMA};
pub use error::ConfigError;
pub use normalization::{AgeFactorStep, AgeFactorTable, NormalizationConfig};
pub use trends::{TrendsConfig, ZoneThresholds};
pub use wealth::WealthConfig;

use ascend_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Age and bodyweight normalization
    pub normalization: NormalizationConfig,
    /// Net worth and income models
    pub wealth: WealthConfig,
    /// Distribution curve construction
    pub distribution: DistributionConfig,
    /// Zones, goals, drop warnings and overall score
    pub trends: TrendsConfig,
}

impl IntelligenceConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first constraint violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.normalization.age_factors.validate()?;

        let norm = &self.normalization;
        if norm.compound_reference_bodyweight_lbs <= 0.0
            || norm.isolation_reference_bodyweight_lbs <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "reference bodyweights must be positive",
            ));
        }
        if !norm.compound_bodyweight_exponent.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "compound bodyweight exponent must be finite",
            ));
        }

        let wealth = &self.wealth;
        if !(wealth.body_fraction > 0.0 && wealth.body_fraction < 1.0) {
            return Err(ConfigError::InvalidRange(
                "net worth body fraction must be inside (0, 1)",
            ));
        }
        if !(wealth.epsilon > 0.0 && wealth.epsilon < 0.01) {
            return Err(ConfigError::InvalidRange("epsilon must be inside (0, 0.01)"));
        }
        if wealth.income_tail_slope <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "income tail slope must be positive",
            ));
        }

        let dist = &self.distribution;
        if !(dist.smoothing_sigma > 0.0 && dist.smoothing_sigma <= MAX_SMOOTHING_SIGMA) {
            return Err(ConfigError::ValueOutOfRange(
                "smoothing sigma must be inside (0, 100]",
            ));
        }
        if dist.min_samples == 0 {
            return Err(ConfigError::ValueOutOfRange("min samples must be at least 1"));
        }
        if dist.canonical_std_dev <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "canonical standard deviation must be positive",
            ));
        }

        let zones = &self.trends.zones;
        if !(zones.needs_work_below < zones.below_average_below
            && zones.below_average_below < zones.above_average_below
            && zones.above_average_below < zones.strong_below)
        {
            return Err(ConfigError::InvalidRange(
                "zone thresholds must be strictly increasing",
            ));
        }
        if self.trends.goal_far_behind_ratio >= self.trends.goal_behind_ratio {
            return Err(ConfigError::InvalidRange(
                "goal far-behind ratio must be < behind ratio",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for unparseable values
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::AGE_FACTOR_TABLE,
            &mut self.normalization.age_factors,
        )?;
        Self::apply_env_var(
            env_config::NETWORTH_BODY_FRACTION,
            &mut self.wealth.body_fraction,
        )?;
        Self::apply_env_var(
            env_config::DISTRIBUTION_SIGMA,
            &mut self.distribution.smoothing_sigma,
        )?;
        Self::apply_env_var(
            env_config::DISTRIBUTION_MIN_SAMPLES,
            &mut self.distribution.min_samples,
        )?;
        Ok(self)
    }
}
