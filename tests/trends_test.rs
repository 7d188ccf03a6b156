// ABOUTME: Integration tests for zones, velocity, projections, scoring, drop warnings and goals
// ABOUTME: Exercises the dashboard analytics built on percentile histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use ascend_core::models::PercentileSample;
use ascend_intelligence::config::intelligence::{TrendsConfig, ZoneThresholds};
use ascend_intelligence::goals::{GoalProgress, GoalStatus};
use ascend_intelligence::trends::{
    aggregate, detect_drop, overall_score, project, velocity, AggregationScale, PercentileZone,
};
use chrono::Duration;
use common::{approx, base_time, sample_at};
use std::collections::HashMap;

#[test]
fn test_zone_boundaries() {
    let zones = ZoneThresholds::default();
    let zone = |p| PercentileZone::classify(p, &zones);
    assert_eq!(zone(0.0), PercentileZone::NeedsWork);
    assert_eq!(zone(25.9), PercentileZone::NeedsWork);
    assert_eq!(zone(26.0), PercentileZone::BelowAverage);
    assert_eq!(zone(50.99), PercentileZone::BelowAverage);
    assert_eq!(zone(51.0), PercentileZone::AboveAverage);
    assert_eq!(zone(76.0), PercentileZone::Strong);
    assert_eq!(zone(90.9), PercentileZone::Strong);
    assert_eq!(zone(91.0), PercentileZone::Elite);
    assert_eq!(zone(100.0).to_string(), "Elite");
    assert_eq!(PercentileZone::NeedsWork.label(), "Needs Work");
}

#[test]
fn test_velocity_per_month() {
    let samples = [sample_at(60, 55.0), sample_at(0, 40.0), sample_at(30, 47.0)];
    let v = velocity(&samples).unwrap();
    assert!(approx(v.change, 15.0, 1e-12));
    assert!(approx(v.days, 60.0, 1e-12));
    assert!(approx(v.rate_per_month, 7.5, 1e-12));
}

#[test]
fn test_velocity_needs_two_timed_samples() {
    assert!(velocity(&[]).is_none());
    assert!(velocity(&[sample_at(0, 40.0)]).is_none());
    assert!(velocity(&[sample_at(3, 40.0), sample_at(3, 60.0)]).is_none());

    let unscored = PercentileSample {
        value: 12.0,
        percentile: None,
        recorded_at: base_time(),
    };
    assert!(velocity(&[unscored, sample_at(10, 60.0)]).is_none());
}

#[test]
fn test_projection_is_linear_and_clamped() {
    let rising = [sample_at(0, 40.0), sample_at(365, 44.0)];
    let projection = project(&rising).unwrap();
    assert!(approx(projection.yearly_growth, 4.0, 1e-9));
    assert!(approx(projection.five_year, 64.0, 1e-9));
    assert!(approx(projection.ten_year, 84.0, 1e-9));

    let steep = [sample_at(0, 60.0), sample_at(365, 80.0)];
    let projection = project(&steep).unwrap();
    assert_eq!(projection.five_year, 100.0);
    assert_eq!(projection.ten_year, 100.0);

    let falling = [sample_at(0, 30.0), sample_at(365, 20.0)];
    let projection = project(&falling).unwrap();
    assert_eq!(projection.five_year, 0.0);
}

#[test]
fn test_overall_score_weights_categories() {
    let config = TrendsConfig::default();
    let percentiles = vec![("physical".to_owned(), 80.0), ("financial".to_owned(), 40.0)];
    let weights = HashMap::from([("physical".to_owned(), 3.0)]);
    let score = overall_score(&percentiles, &weights, &config);
    assert!(approx(score, (80.0 * 3.0 + 40.0 * 5.0) / 8.0, 1e-12));

    assert_eq!(overall_score(&[], &weights, &config), 0.0);

    let zero_weights = HashMap::from([("physical".to_owned(), 0.0)]);
    let only_physical = vec![("physical".to_owned(), 80.0)];
    assert_eq!(overall_score(&only_physical, &zero_weights, &config), 0.0);
}

#[test]
fn test_drop_warnings() {
    let config = TrendsConfig::default();
    let warning = detect_drop("emotional", 70.4, 52.0, &config).unwrap();
    assert_eq!(warning.category, "emotional");
    assert_eq!(warning.drop, 18.0);

    assert!(detect_drop("emotional", 70.0, 55.0, &config).is_some());
    assert!(detect_drop("emotional", 70.0, 56.0, &config).is_none());
    assert!(detect_drop("emotional", 50.0, 80.0, &config).is_none());
}

#[test]
fn test_goal_progress_bands() {
    let config = TrendsConfig::default();
    let goal = |current| GoalProgress::evaluate(current, 80.0, &config).unwrap();

    let behind = goal(60.0);
    assert_eq!(behind.status, GoalStatus::Behind);
    assert!(approx(behind.gap, 20.0, 1e-12));
    assert!(approx(behind.progress, 75.0, 1e-12));

    assert_eq!(goal(40.0).status, GoalStatus::FarBehind);
    assert_eq!(goal(70.0).status, GoalStatus::OnTrack);

    let done = goal(90.0);
    assert!(done.is_achieved());
    assert_eq!(done.progress, 100.0);
    assert!(done.gap < 0.0);
    assert_eq!(goal(80.0).status, GoalStatus::Achieved);
}

#[test]
fn test_goal_requires_positive_target() {
    let config = TrendsConfig::default();
    assert!(GoalProgress::evaluate(50.0, 0.0, &config).is_none());
    assert!(GoalProgress::evaluate(50.0, -10.0, &config).is_none());
    assert!(GoalProgress::evaluate(50.0, f64::NAN, &config).is_none());
}

fn sample_after(hours: i64, value: f64, percentile: Option<f64>) -> PercentileSample {
    PercentileSample {
        value,
        percentile,
        recorded_at: base_time() + Duration::hours(hours),
    }
}

fn periods(samples: &[PercentileSample], scale: AggregationScale) -> Vec<String> {
    aggregate(samples, scale)
        .into_iter()
        .map(|period| period.period)
        .collect()
}

#[test]
fn test_daily_aggregation_averages_scored_samples() {
    let samples = [
        sample_after(30, 30.0, Some(80.0)),
        sample_after(1, 10.0, Some(40.0)),
        sample_after(2, 30.0, None),
        sample_after(5, 20.0, Some(60.0)),
    ];
    let daily = aggregate(&samples, AggregationScale::Daily);

    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].period, "2024-01-01");
    assert_eq!(daily[0].percentile, Some(50.0));
    assert!(approx(daily[0].value, 20.0, 1e-9));
    assert_eq!(daily[0].count, 3);
    assert_eq!(daily[1].period, "2024-01-02");
    assert_eq!(daily[1].percentile, Some(80.0));
    assert_eq!(daily[1].count, 1);
}

#[test]
fn test_hourly_period_without_percentiles_keeps_value() {
    let samples = [
        sample_after(1, 10.0, Some(40.0)),
        sample_after(2, 30.0, None),
        sample_after(30, 30.0, Some(80.0)),
    ];
    let hourly = aggregate(&samples, AggregationScale::Hourly);

    assert_eq!(
        hourly.iter().map(|p| p.period.as_str()).collect::<Vec<_>>(),
        ["2024-01-01 01:00", "2024-01-01 02:00", "2024-01-02 06:00"]
    );
    assert_eq!(hourly[1].percentile, None);
    assert_eq!(hourly[1].value, 30.0);
}

#[test]
fn test_coarse_scales_bucket_by_calendar() {
    // 2024-01-01 is a Monday; day 6 is Sunday 2024-01-07
    let samples = [
        sample_at(0, 40.0),
        sample_at(5, 50.0),
        sample_at(6, 60.0),
        sample_at(40, 70.0),
        sample_at(400, 80.0),
    ];

    assert_eq!(
        periods(&samples, AggregationScale::Weekly),
        ["2023-12-31", "2024-01-07", "2024-02-04", "2025-02-02"]
    );
    assert_eq!(
        periods(&samples, AggregationScale::Monthly),
        ["2024-01", "2024-02", "2025-02"]
    );

    let yearly = aggregate(&samples, AggregationScale::Yearly);
    assert_eq!(yearly.len(), 2);
    assert_eq!(yearly[0].period, "2024");
    assert_eq!(yearly[0].count, 4);
    assert!(approx(yearly[0].percentile.unwrap(), 55.0, 1e-9));
    assert_eq!(yearly[1].period, "2025");
}

#[test]
fn test_aggregation_scale_parsing() {
    assert_eq!("Weekly".parse::<AggregationScale>().unwrap(), AggregationScale::Weekly);
    assert_eq!(" month ".parse::<AggregationScale>().unwrap(), AggregationScale::Monthly);
    assert_eq!(AggregationScale::Hourly.to_string(), "hourly");
    assert!("fortnightly".parse::<AggregationScale>().is_err());
    assert!(aggregate(&[], AggregationScale::Daily).is_empty());
}
