// ABOUTME: Trend analytics over percentile history: zones, velocity, projection, scoring
// ABOUTME: Pure functions over caller-supplied samples and category percentiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! # Trend Analytics
//!
//! Small summaries the dashboard shows next to a metric or category. The
//! caller owns history ordering; functions here sort what they need.

use crate::config::intelligence::{TrendsConfig, ZoneThresholds};
use crate::percentile::clamp_percentile;
use ascend_core::constants::units::{DAYS_PER_MONTH, DAYS_PER_YEAR, MS_PER_DAY};
use ascend_core::errors::AppError;
use ascend_core::models::PercentileSample;
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Coarse band a percentile falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileZone {
    /// Bottom quarter
    NeedsWork,
    /// Second quarter
    BelowAverage,
    /// Third quarter
    AboveAverage,
    /// Up to the 90th percentile
    Strong,
    /// Top decile
    Elite,
}

impl PercentileZone {
    /// Zone for a percentile
    #[must_use]
    pub fn classify(percentile: f64, zones: &ZoneThresholds) -> Self {
        if percentile < zones.needs_work_below {
            Self::NeedsWork
        } else if percentile < zones.below_average_below {
            Self::BelowAverage
        } else if percentile < zones.above_average_below {
            Self::AboveAverage
        } else if percentile < zones.strong_below {
            Self::Strong
        } else {
            Self::Elite
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NeedsWork => "Needs Work",
            Self::BelowAverage => "Below Average",
            Self::AboveAverage => "Above Average",
            Self::Strong => "Strong",
            Self::Elite => "Elite",
        }
    }
}

impl fmt::Display for PercentileZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate of percentile change between the first and last sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    /// Percentile change, last minus first
    pub change: f64,
    /// Days between first and last sample
    pub days: f64,
    /// Change per 30-day month
    pub rate_per_month: f64,
}

/// Future percentiles assuming the current linear trend holds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Percentile change per year
    pub yearly_growth: f64,
    /// Projected percentile in 5 years, clamped to `[0, 100]`
    pub five_year: f64,
    /// Projected percentile in 10 years, clamped to `[0, 100]`
    pub ten_year: f64,
}

/// A category whose percentile fell sharply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropWarning {
    /// Category name
    pub category: String,
    /// Previous percentile
    pub previous: f64,
    /// Latest percentile
    pub latest: f64,
    /// Rounded drop in points
    pub drop: f64,
}

type TimedPercentile = (DateTime<Utc>, f64);

/// Endpoints of the samples that carry a percentile, in time order
fn endpoints(samples: &[PercentileSample]) -> Option<(TimedPercentile, TimedPercentile)> {
    let mut points: Vec<TimedPercentile> = samples
        .iter()
        .filter_map(|s| s.percentile.map(|p| (s.recorded_at, p)))
        .collect();
    if points.len() < 2 {
        return None;
    }
    points.sort_by_key(|(at, _)| *at);
    Some((*points.first()?, *points.last()?))
}

fn elapsed_days(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MS_PER_DAY
}

/// Velocity across the samples' time span
///
/// `None` for fewer than two percentile-bearing samples or a zero span.
#[must_use]
pub fn velocity(samples: &[PercentileSample]) -> Option<Velocity> {
    let ((first_at, first), (last_at, last)) = endpoints(samples)?;
    let days = elapsed_days(first_at, last_at);
    if days <= 0.0 {
        return None;
    }
    let change = last - first;
    Some(Velocity {
        change,
        days,
        rate_per_month: change / days * DAYS_PER_MONTH,
    })
}

/// Linear projection 5 and 10 years out
#[must_use]
pub fn project(samples: &[PercentileSample]) -> Option<Projection> {
    let ((first_at, first), (last_at, last)) = endpoints(samples)?;
    let days = elapsed_days(first_at, last_at);
    if days <= 0.0 {
        return None;
    }
    let yearly_growth = (last - first) / days * DAYS_PER_YEAR;
    Some(Projection {
        yearly_growth,
        five_year: clamp_percentile(yearly_growth.mul_add(5.0, last)),
        ten_year: clamp_percentile(yearly_growth.mul_add(10.0, last)),
    })
}

/// Weighted mean of category percentiles
///
/// Categories missing from `weights` use the configured default weight.
/// Returns 0 when nothing contributes weight.
#[must_use]
pub fn overall_score(
    percentiles: &[(String, f64)],
    weights: &HashMap<String, f64>,
    config: &TrendsConfig,
) -> f64 {
    let (weighted, total) = percentiles.iter().fold((0.0, 0.0), |(weighted, total), (name, p)| {
        let weight = weights
            .get(name)
            .copied()
            .unwrap_or(config.default_category_weight);
        (p.mul_add(weight, weighted), total + weight)
    });
    if total > 0.0 {
        weighted / total
    } else {
        0.0
    }
}

/// Warning when `latest` fell at least the configured threshold below `previous`
#[must_use]
pub fn detect_drop(
    category: &str,
    previous: f64,
    latest: f64,
    config: &TrendsConfig,
) -> Option<DropWarning> {
    let drop = previous - latest;
    (drop >= config.drop_warning_threshold).then(|| DropWarning {
        category: category.to_owned(),
        previous,
        latest,
        drop: drop.round(),
    })
}

/// Width of the periods history is grouped into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationScale {
    /// `YYYY-MM-DD HH:00`
    Hourly,
    /// `YYYY-MM-DD`
    Daily,
    /// Date of the Sunday starting the week
    Weekly,
    /// `YYYY-MM`
    Monthly,
    /// `YYYY`
    Yearly,
}

impl AggregationScale {
    /// Key of the period containing `at`, computed in UTC
    ///
    /// Keys of one scale sort in time order.
    #[must_use]
    pub fn period_key(&self, at: DateTime<Utc>) -> String {
        match self {
            Self::Hourly => at.format("%Y-%m-%d %H:00").to_string(),
            Self::Daily => at.format("%Y-%m-%d").to_string(),
            Self::Weekly => {
                let back = Duration::days(i64::from(at.weekday().num_days_from_sunday()));
                (at.date_naive() - back).format("%Y-%m-%d").to_string()
            }
            Self::Monthly => at.format("%Y-%m").to_string(),
            Self::Yearly => at.format("%Y").to_string(),
        }
    }
}

impl fmt::Display for AggregationScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        })
    }
}

impl FromStr for AggregationScale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hourly" | "hour" => Ok(Self::Hourly),
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" => Ok(Self::Yearly),
            other => Err(AppError::invalid_input(format!(
                "Unknown aggregation scale: '{other}'. Valid options: hourly, daily, weekly, monthly, yearly"
            ))),
        }
    }
}

/// Means over the samples of one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAggregate {
    /// Period key, see [`AggregationScale::period_key`]
    pub period: String,
    /// Mean percentile, `None` when no sample in the period carries one
    pub percentile: Option<f64>,
    /// Mean raw value
    pub value: f64,
    /// Samples in the period
    pub count: usize,
}

#[derive(Default)]
struct PeriodSums {
    percentile_sum: f64,
    scored: usize,
    value_sum: f64,
    count: usize,
}

/// Group samples into periods and average each one
///
/// Periods come back oldest first regardless of input order.
#[must_use]
pub fn aggregate(samples: &[PercentileSample], scale: AggregationScale) -> Vec<PeriodAggregate> {
    let mut periods: BTreeMap<String, PeriodSums> = BTreeMap::new();
    for sample in samples {
        let sums = periods.entry(scale.period_key(sample.recorded_at)).or_default();
        if let Some(p) = sample.percentile {
            sums.percentile_sum += p;
            sums.scored += 1;
        }
        sums.value_sum += sample.value;
        sums.count += 1;
    }

    periods
        .into_iter()
        .map(|(period, sums)| PeriodAggregate {
            period,
            percentile: (sums.scored > 0).then_some(sums.percentile_sum / sums.scored as f64),
            value: sums.value_sum / sums.count as f64,
            count: sums.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample(days: i64, percentile: f64) -> PercentileSample {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default();
        PercentileSample::new(0.0, percentile, base + Duration::days(days))
    }

    #[test]
    fn test_zone_boundaries() {
        let zones = ZoneThresholds::default();
        assert_eq!(PercentileZone::classify(25.9, &zones), PercentileZone::NeedsWork);
        assert_eq!(PercentileZone::classify(26.0, &zones), PercentileZone::BelowAverage);
        assert_eq!(PercentileZone::classify(75.0, &zones), PercentileZone::AboveAverage);
        assert_eq!(PercentileZone::classify(90.5, &zones), PercentileZone::Strong);
        assert_eq!(PercentileZone::classify(91.0, &zones), PercentileZone::Elite);
    }

    #[test]
    fn test_velocity_sorts_by_time() {
        let samples = [sample(60, 70.0), sample(0, 40.0), sample(30, 55.0)];
        let v = velocity(&samples);
        assert!(matches!(v, Some(v) if (v.rate_per_month - 15.0).abs() < 1e-9));
    }

    #[test]
    fn test_velocity_needs_two_points() {
        assert!(velocity(&[sample(0, 40.0)]).is_none());
        assert!(velocity(&[sample(5, 40.0), sample(5, 60.0)]).is_none());
    }

    #[test]
    fn test_projection_clamps() {
        let samples = [sample(0, 50.0), sample(365, 80.0)];
        let projection = project(&samples);
        assert!(matches!(
            projection,
            Some(p) if (p.yearly_growth - 30.0).abs() < 1e-9 && (p.five_year - 100.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_weeks_start_on_sunday() {
        let saturday = Utc.with_ymd_and_hms(2024, 1, 6, 23, 0, 0).single().unwrap_or_default();
        let sunday = Utc.with_ymd_and_hms(2024, 1, 7, 0, 30, 0).single().unwrap_or_default();
        assert_eq!(AggregationScale::Weekly.period_key(saturday), "2023-12-31");
        assert_eq!(AggregationScale::Weekly.period_key(sunday), "2024-01-07");
    }
}
