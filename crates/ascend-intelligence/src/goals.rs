// ABOUTME: Goal progress evaluation against a target percentile
// ABOUTME: Computes gap, capped progress and a far-behind/behind/on-track status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use crate::config::intelligence::TrendsConfig;
use ascend_core::constants::percentile::MAX;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How far a metric is from its goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    /// Below the far-behind ratio of the target
    FarBehind,
    /// Below the behind ratio of the target
    Behind,
    /// Close to the target
    OnTrack,
    /// At or above the target
    Achieved,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FarBehind => "far-behind",
            Self::Behind => "behind",
            Self::OnTrack => "on-track",
            Self::Achieved => "achieved",
        })
    }
}

/// Progress toward a target percentile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Current percentile
    pub current: f64,
    /// Target percentile
    pub target: f64,
    /// Points still to gain, `<= 0` once achieved
    pub gap: f64,
    /// Progress toward target in percent, capped at 100
    pub progress: f64,
    /// Status band
    pub status: GoalStatus,
}

impl GoalProgress {
    /// Evaluate progress; `None` when the target is not positive
    #[must_use]
    pub fn evaluate(current: f64, target: f64, config: &TrendsConfig) -> Option<Self> {
        if target.is_nan() || target <= 0.0 {
            return None;
        }
        let gap = target - current;
        let status = if gap <= 0.0 {
            GoalStatus::Achieved
        } else if current < target * config.goal_far_behind_ratio {
            GoalStatus::FarBehind
        } else if current < target * config.goal_behind_ratio {
            GoalStatus::Behind
        } else {
            GoalStatus::OnTrack
        };
        Some(Self {
            current,
            target,
            gap,
            progress: (current / target * MAX).min(MAX),
            status,
        })
    }

    /// Whether the goal has been reached
    #[must_use]
    pub fn is_achieved(&self) -> bool {
        self.status == GoalStatus::Achieved
    }
}
