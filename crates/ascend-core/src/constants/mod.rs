// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for profile defaults, percentile anchors, units and env keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Defaults substituted when a profile field is missing at calculation time
pub mod profile_defaults {
    /// Default age in years
    pub const AGE: u32 = 30;
    /// Default bodyweight in pounds
    pub const BODYWEIGHT_LBS: f64 = 180.0;
    /// Default gender label
    pub const GENDER: &str = "male";
}

/// Percentile scale constants
pub mod percentile {
    /// Percentile points every standard benchmark curve is anchored at
    pub const STANDARD_ANCHORS: [f64; 7] = [1.0, 10.0, 25.0, 50.0, 75.0, 90.0, 99.0];
    /// Lowest percentile on the display scale
    pub const MIN: f64 = 0.0;
    /// Highest percentile on the display scale
    pub const MAX: f64 = 100.0;
    /// Number of integer buckets on the 0..=100 scale
    pub const BUCKETS: usize = 101;
    /// Clamp distance from 0 and 1 for CDF and inverse-CDF evaluation
    pub const EPSILON: f64 = 1e-6;
}

/// Unit conversion constants
pub mod units {
    /// Pounds per kilogram
    pub const LBS_PER_KG: f64 = 2.204_622_621_8;
    /// Milliseconds in one day
    pub const MS_PER_DAY: f64 = 86_400_000.0;
    /// Days in the "month" used for velocity rates
    pub const DAYS_PER_MONTH: f64 = 30.0;
    /// Days in the year used for projections
    pub const DAYS_PER_YEAR: f64 = 365.0;
}

/// History query defaults
pub mod history {
    /// Default number of samples fetched for a distribution curve
    pub const DEFAULT_SAMPLE_LIMIT: usize = 100;
}

/// Environment variable names read by the configuration layers
pub mod env_config {
    /// Default age override
    pub const DEFAULT_AGE: &str = "ASCEND_DEFAULT_AGE";
    /// Default bodyweight override (pounds)
    pub const DEFAULT_BODYWEIGHT: &str = "ASCEND_DEFAULT_BODYWEIGHT";
    /// Default gender override
    pub const DEFAULT_GENDER: &str = "ASCEND_DEFAULT_GENDER";
    /// History sample limit
    pub const HISTORY_LIMIT: &str = "ASCEND_HISTORY_LIMIT";
    /// History sample order (`asc` or `desc`)
    pub const HISTORY_ORDER: &str = "ASCEND_HISTORY_ORDER";
    /// Age factor table override, e.g. `26:1.0,36:0.97,46:0.93,56:0.87,*:0.80`
    pub const AGE_FACTOR_TABLE: &str = "ASCEND_AGE_FACTOR_TABLE";
    /// Net worth log-normal body fraction
    pub const NETWORTH_BODY_FRACTION: &str = "ASCEND_NETWORTH_BODY_FRACTION";
    /// Gaussian smoothing sigma for distribution curves
    pub const DISTRIBUTION_SIGMA: &str = "ASCEND_DISTRIBUTION_SIGMA";
    /// Minimum samples before an empirical curve is built
    pub const DISTRIBUTION_MIN_SAMPLES: &str = "ASCEND_DISTRIBUTION_MIN_SAMPLES";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name for the engine
    pub const ASCEND: &str = "ascend";
}
