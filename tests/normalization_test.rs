// ABOUTME: Integration tests for age and bodyweight normalization
// ABOUTME: Covers the age factor table, bodyweight power laws and their inverses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use ascend_intelligence::config::intelligence::{AgeFactorTable, NormalizationConfig};
use ascend_intelligence::percentile::normalization::{
    age_factor, compound_bodyweight_factor, denormalize_compound, denormalize_isolation,
    denormalize_race_time, isolation_bodyweight_factor, normalize_compound, normalize_isolation,
    normalize_race_time,
};
use common::approx;

#[test]
fn test_age_factor_steps() {
    let config = NormalizationConfig::default();
    let cases = [
        (18, 1.00),
        (25, 1.00),
        (26, 0.97),
        (35, 0.97),
        (36, 0.93),
        (45, 0.93),
        (46, 0.87),
        (55, 0.87),
        (56, 0.80),
        (90, 0.80),
    ];
    for (age, factor) in cases {
        assert_eq!(age_factor(age, &config), factor, "age {age}");
    }
}

#[test]
fn test_age_table_parses_and_prints() {
    let table: AgeFactorTable = "30:1.0,50:0.9,*:0.75".parse().unwrap();
    assert_eq!(table.factor_for(29), 1.0);
    assert_eq!(table.factor_for(30), 0.9);
    assert_eq!(table.factor_for(70), 0.75);

    let reparsed: AgeFactorTable = table.to_string().parse().unwrap();
    assert_eq!(reparsed, table);
}

#[test]
fn test_age_table_rejects_garbage() {
    assert!("".parse::<AgeFactorTable>().is_err());
    assert!("30:abc,*:0.8".parse::<AgeFactorTable>().is_err());
    assert!("50:1.0,30:0.9,*:0.8".parse::<AgeFactorTable>().is_err());
}

#[test]
fn test_bodyweight_factors_at_reference() {
    let config = NormalizationConfig::default();
    assert!(approx(compound_bodyweight_factor(180.0, &config), 1.0, 1e-12));
    assert!(approx(isolation_bodyweight_factor(135.0, &config), 1.0, 1e-12));

    // Heavier lifters get a smaller compound factor, a larger isolation factor
    assert!(compound_bodyweight_factor(240.0, &config) < 1.0);
    assert!(isolation_bodyweight_factor(240.0, &config) > 1.0);
    assert!(approx(
        isolation_bodyweight_factor(540.0, &config),
        2.0,
        1e-12
    ));
}

#[test]
fn test_compound_normalization_at_reference() {
    let config = NormalizationConfig::default();
    let ratio = normalize_compound(270.0, 180.0, 25, &config);
    assert!(approx(ratio, 1.5, 1e-12));

    let older = normalize_compound(270.0, 180.0, 40, &config);
    assert!(approx(older, 1.5 / 0.93, 1e-12));
}

#[test]
fn test_normalization_inverses() {
    let config = NormalizationConfig::default();
    for (weight, bodyweight, age) in [(135.0, 150.0, 22), (315.0, 220.0, 47), (95.0, 120.0, 61)] {
        let c = normalize_compound(weight, bodyweight, age, &config);
        assert!(approx(denormalize_compound(c, bodyweight, age, &config), weight, 1e-9));

        let i = normalize_isolation(weight, bodyweight, age, &config);
        assert!(approx(denormalize_isolation(i, bodyweight, age, &config), weight, 1e-9));
    }

    let adjusted = normalize_race_time(25.0, 50, &config);
    assert!(approx(adjusted, 25.0 * 0.87, 1e-12));
    assert!(approx(denormalize_race_time(adjusted, 50, &config), 25.0, 1e-12));
}

#[test]
fn test_non_positive_bodyweight_does_not_divide_by_zero() {
    let config = NormalizationConfig::default();
    assert!(normalize_compound(100.0, 0.0, 30, &config).is_finite());
    assert!(normalize_isolation(100.0, 0.0, 30, &config).is_finite());
}
