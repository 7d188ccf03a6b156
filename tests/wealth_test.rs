// ABOUTME: Integration tests for the net worth and income models
// ABOUTME: Covers cohort resolution, log-normal body, Pareto tail and the income breakpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use ascend_intelligence::config::intelligence::WealthConfig;
use ascend_intelligence::percentile::{AgeGroup, IncomeModel, MetricArgs, NetWorthModel};
use common::{approx, standard_registry};

#[test]
fn test_age_group_resolution() {
    assert_eq!(AgeGroup::from_age(18), AgeGroup::Twenties);
    assert_eq!(AgeGroup::from_age(35), AgeGroup::Thirties);
    assert_eq!(AgeGroup::from_age(49), AgeGroup::Forties);
    assert_eq!(AgeGroup::from_age(50), AgeGroup::Fifties);
    assert_eq!(AgeGroup::from_age(85), AgeGroup::Sixties);
    assert_eq!("30S".parse::<AgeGroup>().unwrap(), AgeGroup::Thirties);
    assert!("70s".parse::<AgeGroup>().is_err());
}

#[test]
fn test_net_worth_round_trip_thirties() {
    let model = NetWorthModel::default();
    for p in [1.0, 25.0, 50.0, 75.0, 99.0] {
        let value = model.value_at(p, AgeGroup::Thirties);
        let back = model.percentile_of(value, AgeGroup::from_age(35));
        assert!(approx(back, p, 0.5), "p{p} -> {value} -> p{back}");
    }
}

#[test]
fn test_median_near_cohort_exp_mu() {
    let model = NetWorthModel::default();
    let median = model.value_at(50.0, AgeGroup::Thirties);
    let exp_mu = AgeGroup::Thirties.params().mu.exp();
    assert!(median > 100_000.0 && median < 250_000.0, "median {median}");
    assert!(approx(median / exp_mu, 1.0, 0.05));
}

#[test]
fn test_pareto_tail_dominates_top_percentiles() {
    let model = NetWorthModel::default();
    let median = model.value_at(50.0, AgeGroup::Thirties);
    let top = model.value_at(99.5, AgeGroup::Thirties);
    assert!(top > 5.0 * median, "p99.5 {top} vs median {median}");

    // Halfway into the tail: scale / sqrt(0.25) for alpha = 2
    assert!(approx(top, 1_200_000.0, 1.0));
}

#[test]
fn test_extreme_percentiles_stay_finite() {
    let model = NetWorthModel::default();
    for group in AgeGroup::ALL {
        let low = model.value_at(0.0, group);
        let high = model.value_at(100.0, group);
        assert!(low.is_finite() && low > 0.0);
        assert!(high.is_finite() && high > low);
    }
}

#[test]
fn test_non_positive_net_worth_ranks_at_bottom() {
    let model = NetWorthModel::default();
    assert!(model.percentile_of(0.0, AgeGroup::Forties) < 0.01);
    assert!(model.percentile_of(-50_000.0, AgeGroup::Forties) < 0.01);
    assert_eq!(model.percentile_of(f64::NAN, AgeGroup::Forties), 0.0);
}

#[test]
fn test_same_wealth_ranks_lower_for_older_cohorts() {
    let model = NetWorthModel::default();
    let young = model.percentile_of(200_000.0, AgeGroup::Twenties);
    let old = model.percentile_of(200_000.0, AgeGroup::Sixties);
    assert!(young > old);
}

#[test]
fn test_registry_net_worth_uses_profile_age() {
    let registry = standard_registry();
    let thirties = registry
        .percentile(
            "networth_percentile",
            &MetricArgs::new(168_000.0).with_age(35),
        )
        .unwrap();
    assert!(approx(thirties, 50.0, 1.0));

    let fifties = registry
        .percentile(
            "networth_percentile",
            &MetricArgs::new(168_000.0).with_age(55),
        )
        .unwrap();
    assert!(fifties < thirties);
}

#[test]
fn test_income_breakpoints_and_tail() {
    let model = IncomeModel::new(&WealthConfig::default()).unwrap();
    assert!(approx(model.percentile_of(28_000.0), 25.0, 1e-9));
    assert!(approx(model.percentile_of(71_000.0), 62.5, 1e-9));
    assert_eq!(model.percentile_of(0.0), 0.0);
    assert!(approx(model.percentile_of(1_000_000.0), 99.5, 1e-9));
    assert_eq!(model.percentile_of(5_000_000.0), 100.0);

    assert!(approx(model.value_at(90.0), 145_000.0, 1e-6));
    assert!(approx(model.value_at(99.5), 1_000_000.0, 1e-3));
}
