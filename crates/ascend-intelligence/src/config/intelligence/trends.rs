// ABOUTME: Trend and goal configuration for zones, goal status, drop warnings and scoring
// ABOUTME: Thresholds consumed by the trends and goals modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use serde::{Deserialize, Serialize};

/// Percentile zone boundaries (exclusive upper bounds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneThresholds {
    /// Below this is "Needs Work"
    pub needs_work_below: f64,
    /// Below this is "Below Average"
    pub below_average_below: f64,
    /// Below this is "Above Average"
    pub above_average_below: f64,
    /// Below this is "Strong", at or above is "Elite"
    pub strong_below: f64,
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        Self {
            needs_work_below: 26.0,
            below_average_below: 51.0,
            above_average_below: 76.0,
            strong_below: 91.0,
        }
    }
}

/// Trend and Goal Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendsConfig {
    /// Zone boundaries
    pub zones: ZoneThresholds,
    /// Current/target ratio under which a goal is far behind
    pub goal_far_behind_ratio: f64,
    /// Current/target ratio under which a goal is behind
    pub goal_behind_ratio: f64,
    /// Percentile drop between consecutive samples that raises a warning
    pub drop_warning_threshold: f64,
    /// Weight for categories without an explicit weight
    pub default_category_weight: f64,
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            zones: ZoneThresholds::default(),
            goal_far_behind_ratio: 0.7,
            goal_behind_ratio: 0.85,
            drop_warning_threshold: 15.0,
            default_category_weight: 5.0,
        }
    }
}
