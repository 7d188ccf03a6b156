// ABOUTME: Achievement rules unlocked by entry counts and category standings
// ABOUTME: Parses the textual condition forms and evaluates them against a user's roll-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! # Achievements
//!
//! Each achievement carries one condition. Conditions read two inputs: the
//! number of entries the user has recorded and the current percentile
//! standing of each category they track.
//!
//! Conditions have a compact text form:
//!
//! | Form | Unlocks when |
//! |------|--------------|
//! | `entries >= N` | at least `N` entries are recorded |
//! | `<category> >= P` | that category stands at `P` or higher |
//! | `all_above_P` | at least seven categories are tracked and all stand at `P` or higher |
//! | `any_above_P` | some category stands at `P` or higher |

use ascend_core::constants::percentile::{MAX, MIN};
use ascend_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Categories that must be tracked before an `all_above_P` condition can unlock
pub const ALL_ABOVE_MIN_CATEGORIES: usize = 7;

/// What an achievement requires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AchievementCondition {
    /// Total recorded entries reach `count`
    EntriesAtLeast {
        /// Required entry count
        count: usize,
    },
    /// One category reaches `percentile`
    CategoryAtLeast {
        /// Category path as stored
        category: String,
        /// Required standing
        percentile: f64,
    },
    /// Every tracked category reaches `percentile`
    AllAbove {
        /// Required standing
        percentile: f64,
        /// Categories that must be tracked
        min_categories: usize,
    },
    /// Some tracked category reaches `percentile`
    AnyAbove {
        /// Required standing
        percentile: f64,
    },
}

fn parse_percentile(raw: &str) -> AppResult<f64> {
    let percentile: f64 = raw.trim().parse().map_err(|e| {
        AppError::invalid_input(format!("Invalid achievement threshold: '{raw}'")).with_source(e)
    })?;
    if !(MIN..=MAX).contains(&percentile) {
        return Err(AppError::out_of_range(format!(
            "Achievement threshold {percentile} must be inside [0, 100]"
        )));
    }
    Ok(percentile)
}

impl FromStr for AchievementCondition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(raw) = s.strip_prefix("all_above_") {
            return Ok(Self::AllAbove {
                percentile: parse_percentile(raw)?,
                min_categories: ALL_ABOVE_MIN_CATEGORIES,
            });
        }
        if let Some(raw) = s.strip_prefix("any_above_") {
            return Ok(Self::AnyAbove {
                percentile: parse_percentile(raw)?,
            });
        }

        let Some((subject, threshold)) = s.split_once(">=") else {
            return Err(AppError::invalid_input(format!(
                "Unknown achievement condition: '{s}'"
            )));
        };
        match subject.trim() {
            "" => Err(AppError::invalid_input(format!(
                "Achievement condition '{s}' names no category"
            ))),
            "entries" => {
                let count = threshold.trim().parse().map_err(|e| {
                    AppError::invalid_input(format!("Invalid entry count in '{s}'")).with_source(e)
                })?;
                Ok(Self::EntriesAtLeast { count })
            }
            category => Ok(Self::CategoryAtLeast {
                category: category.to_owned(),
                percentile: parse_percentile(threshold)?,
            }),
        }
    }
}

impl fmt::Display for AchievementCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntriesAtLeast { count } => write!(f, "entries >= {count}"),
            Self::CategoryAtLeast {
                category,
                percentile,
            } => write!(f, "{category} >= {percentile}"),
            Self::AllAbove { percentile, .. } => write!(f, "all_above_{percentile}"),
            Self::AnyAbove { percentile } => write!(f, "any_above_{percentile}"),
        }
    }
}

impl AchievementCondition {
    /// Whether the condition holds
    ///
    /// `standings` pairs each tracked category with its current percentile.
    #[must_use]
    pub fn is_met(&self, entries: usize, standings: &[(String, f64)]) -> bool {
        match self {
            Self::EntriesAtLeast { count } => entries >= *count,
            Self::CategoryAtLeast {
                category,
                percentile,
            } => standings
                .iter()
                .any(|(name, p)| name == category && *p >= *percentile),
            Self::AllAbove {
                percentile,
                min_categories,
            } => {
                standings.len() >= *min_categories
                    && standings.iter().all(|(_, p)| *p >= *percentile)
            }
            Self::AnyAbove { percentile } => standings.iter().any(|(_, p)| *p >= *percentile),
        }
    }
}

/// A named achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable identifier
    pub id: u32,
    /// Display title
    pub title: String,
    /// Unlock rule
    pub condition: AchievementCondition,
}

impl Achievement {
    /// Build an achievement from the text form of its condition
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unparseable condition and
    /// `ValueOutOfRange` for a percentile threshold outside `[0, 100]`
    pub fn parse(id: u32, title: impl Into<String>, condition: &str) -> AppResult<Self> {
        Ok(Self {
            id,
            title: title.into(),
            condition: condition.parse()?,
        })
    }
}

/// Whether one achievement is unlocked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementStatus {
    /// Achievement identifier
    pub id: u32,
    /// Display title
    pub title: String,
    /// Unlock state
    pub unlocked: bool,
}

fn standard(id: u32, title: &str, condition: AchievementCondition) -> Achievement {
    Achievement {
        id,
        title: title.to_owned(),
        condition,
    }
}

fn category_at_least(category: &str, percentile: f64) -> AchievementCondition {
    AchievementCondition::CategoryAtLeast {
        category: category.to_owned(),
        percentile,
    }
}

/// The built-in achievement set
#[must_use]
pub fn standard_achievements() -> Vec<Achievement> {
    vec![
        standard(1, "First Steps", AchievementCondition::EntriesAtLeast { count: 1 }),
        standard(2, "Consistent Tracker", AchievementCondition::EntriesAtLeast { count: 10 }),
        standard(3, "Physical Elite", category_at_least("physical", 80.0)),
        standard(4, "Mental Giant", category_at_least("cognitive", 80.0)),
        standard(5, "Social Butterfly", category_at_least("social", 80.0)),
        standard(6, "Wealthy Mind", category_at_least("financial", 80.0)),
        standard(
            7,
            "Well-Rounded",
            AchievementCondition::AllAbove {
                percentile: 50.0,
                min_categories: ALL_ABOVE_MIN_CATEGORIES,
            },
        ),
        standard(8, "Peak Performance", AchievementCondition::AnyAbove { percentile: 90.0 }),
    ]
}

/// Unlock state of every achievement, in input order
#[must_use]
pub fn evaluate(
    achievements: &[Achievement],
    entries: usize,
    standings: &[(String, f64)],
) -> Vec<AchievementStatus> {
    let statuses: Vec<AchievementStatus> = achievements
        .iter()
        .map(|achievement| AchievementStatus {
            id: achievement.id,
            title: achievement.title.clone(),
            unlocked: achievement.condition.is_met(entries, standings),
        })
        .collect();
    debug!(
        entries,
        categories = standings.len(),
        unlocked = statuses.iter().filter(|s| s.unlocked).count(),
        "evaluated achievements"
    );
    statuses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_conditions_round_trip_their_text() {
        for achievement in standard_achievements() {
            let text = achievement.condition.to_string();
            let parsed: AchievementCondition = text.parse().unwrap_or(AchievementCondition::AnyAbove {
                percentile: -1.0,
            });
            assert_eq!(parsed, achievement.condition, "{text}");
        }
    }

    #[test]
    fn test_entries_prefix_is_not_a_category() {
        assert_eq!(
            "entries >= 3".parse::<AchievementCondition>().ok(),
            Some(AchievementCondition::EntriesAtLeast { count: 3 })
        );
    }
}
