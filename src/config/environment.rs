// ABOUTME: Environment configuration for the application shell around the percentile engine
// ABOUTME: Profile defaults, history query settings, engine tuning and logging from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Environment-based configuration

use crate::logging::LoggingConfig;
use crate::store::SampleOrder;
use anyhow::{anyhow, Context, Result};
use ascend_core::constants::{env_config, history, profile_defaults};
use ascend_core::models::Gender;
use ascend_intelligence::config::IntelligenceConfig;
use ascend_intelligence::percentile::ProfileDefaults;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// History query settings used when building distribution curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum samples fetched per query
    pub limit: usize,
    /// Time order requested from the sample source
    pub order: SampleOrder,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: history::DEFAULT_SAMPLE_LIMIT,
            order: SampleOrder::NewestFirst,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Defaults for missing profile fields
    pub profile_defaults: ProfileDefaults,
    /// History query settings
    pub history: HistoryConfig,
    /// Engine tuning
    pub intelligence: IntelligenceConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but unparseable, or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            profile_defaults: ProfileDefaults {
                age: parse_env(env_config::DEFAULT_AGE, profile_defaults::AGE)?,
                bodyweight_lbs: parse_env(
                    env_config::DEFAULT_BODYWEIGHT,
                    profile_defaults::BODYWEIGHT_LBS,
                )?,
                gender: parse_env(env_config::DEFAULT_GENDER, Gender::default())?,
            },
            history: HistoryConfig {
                limit: parse_env(env_config::HISTORY_LIMIT, history::DEFAULT_SAMPLE_LIMIT)?,
                order: parse_env(env_config::HISTORY_ORDER, SampleOrder::NewestFirst)?,
            },
            intelligence: IntelligenceConfig::load()
                .context("Invalid intelligence configuration")?,
            logging: LoggingConfig::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        let bodyweight = self.profile_defaults.bodyweight_lbs;
        if !(bodyweight.is_finite() && bodyweight > 0.0) {
            return Err(anyhow!(
                "{} must be a positive number of pounds",
                env_config::DEFAULT_BODYWEIGHT
            ));
        }
        if self.history.limit == 0 {
            return Err(anyhow!("{} must be at least 1", env_config::HISTORY_LIMIT));
        }
        self.intelligence
            .validate()
            .context("Invalid intelligence configuration")?;
        Ok(())
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Ascend Configuration:\n\
             - Environment: {}\n\
             - Default Profile: age {}, {} lbs, {}\n\
             - History: {} samples, {}\n\
             - Age Factors: {}\n\
             - Net Worth Body Fraction: {}\n\
             - Distribution: sigma {}, min {} samples",
            self.environment,
            self.profile_defaults.age,
            self.profile_defaults.bodyweight_lbs,
            self.profile_defaults.gender,
            self.history.limit,
            self.history.order,
            self.intelligence.normalization.age_factors,
            self.intelligence.wealth.body_fraction,
            self.intelligence.distribution.smoothing_sigma,
            self.intelligence.distribution.min_samples,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid {key}='{raw}': {e}")),
        Err(_) => Ok(default),
    }
}
