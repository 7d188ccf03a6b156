// ABOUTME: Integration tests for the metric registry and per-family metric models
// ABOUTME: Covers lookup, fail-closed unknown names, argument defaults and definition validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use ascend_core::constants::units::LBS_PER_KG;
use ascend_core::errors::ErrorCode;
use ascend_core::models::{CategoryPath, Gender, MetricDefinition, ParameterRole, WeightUnit};
use ascend_intelligence::percentile::{MetricArgs, MetricFamily};
use common::{approx, standard_registry};

fn strength() -> CategoryPath {
    CategoryPath::parse("physical.strength").unwrap()
}

#[test]
fn test_registry_holds_every_family() {
    let registry = standard_registry();
    assert_eq!(registry.len(), 38);

    let count = |family| {
        registry
            .metrics()
            .iter()
            .filter(|m| m.family == family)
            .count()
    };
    assert_eq!(count(MetricFamily::CompoundLift), 7);
    assert_eq!(count(MetricFamily::IsolationLift), 5);
    assert_eq!(count(MetricFamily::Conditioning), 2);
    assert_eq!(count(MetricFamily::Cognitive), 1);
    assert_eq!(count(MetricFamily::Financial), 2);
    assert_eq!(count(MetricFamily::Emotional), 20);
    assert_eq!(count(MetricFamily::Social), 1);
}

#[test]
fn test_metrics_are_sorted_by_family_then_name() {
    let registry = standard_registry();
    let metrics = registry.metrics();
    assert_eq!(metrics[0].name, "bench_press_percentile");
    assert!(metrics
        .windows(2)
        .all(|pair| (pair[0].family, pair[0].name) < (pair[1].family, pair[1].name)));
}

#[test]
fn test_unknown_metric_fails_closed() {
    let registry = standard_registry();
    assert!(registry.resolve("vo2_max_percentile").is_none());
    assert!(registry
        .percentile("vo2_max_percentile", &MetricArgs::new(50.0))
        .is_none());
    assert!(registry
        .value_at_percentile("vo2_max_percentile", 50.0, &MetricArgs::new(0.0))
        .is_none());
    assert!(!registry.contains("vo2_max_percentile"));
}

#[test]
fn test_iq_uses_cumulative_normal() {
    let registry = standard_registry();
    let p = registry
        .percentile("iq_percentile", &MetricArgs::new(130.0))
        .unwrap();
    assert!(approx(p, 97.725, 0.01), "iq 130 -> {p}");

    let median = registry
        .value_at_percentile("iq_percentile", 50.0, &MetricArgs::new(0.0))
        .unwrap();
    assert!(approx(median, 100.0, 1e-6));
}

#[test]
fn test_bench_press_ratio_between_anchors() {
    let registry = standard_registry();
    let args = MetricArgs::new(0.85 * 180.0)
        .with_age(25)
        .with_bodyweight(180.0);
    let p = registry.percentile("bench_press_percentile", &args).unwrap();
    assert!(p > 75.0 && p < 90.0, "bench 0.85 ratio -> {p}");
}

#[test]
fn test_older_lifter_ranks_higher_for_same_lift() {
    let registry = standard_registry();
    let young = MetricArgs::new(200.0).with_age(25).with_bodyweight(180.0);
    let older = young.with_age(50);
    let p_young = registry.percentile("squat_percentile", &young).unwrap();
    let p_older = registry.percentile("squat_percentile", &older).unwrap();
    assert!(p_older > p_young);
}

#[test]
fn test_kilogram_inputs_match_pounds() {
    let registry = standard_registry();
    let pounds = MetricArgs::new(225.0).with_age(28).with_bodyweight(190.0);
    let kilos = MetricArgs::new(225.0 / LBS_PER_KG)
        .with_age(28)
        .with_bodyweight(190.0 / LBS_PER_KG)
        .with_unit(WeightUnit::Kilograms);

    let p_lbs = registry.percentile("deadlift_percentile", &pounds).unwrap();
    let p_kg = registry.percentile("deadlift_percentile", &kilos).unwrap();
    assert!(approx(p_lbs, p_kg, 1e-9));

    // Inverse answers in the caller's unit
    let target_kg = registry
        .value_at_percentile("deadlift_percentile", p_kg, &kilos)
        .unwrap();
    assert!(approx(target_kg, 225.0 / LBS_PER_KG, 1e-6));
}

#[test]
fn test_missing_profile_fields_use_defaults() {
    let registry = standard_registry();
    let bare = MetricArgs::new(160.0);
    let explicit = MetricArgs::new(160.0).with_age(30).with_bodyweight(180.0);
    assert_eq!(
        registry.percentile("bench_press_percentile", &bare),
        registry.percentile("bench_press_percentile", &explicit)
    );

    let run = MetricArgs::new(24.0);
    let male = run.with_age(30).with_gender(Gender::Male);
    assert_eq!(
        registry.percentile("run_5k_percentile", &run),
        registry.percentile("run_5k_percentile", &male)
    );
}

#[test]
fn test_run_time_is_lower_is_better() {
    let registry = standard_registry();
    let args = MetricArgs::new(22.0).with_age(25).with_gender(Gender::Male);
    let median = registry.percentile("run_5k_percentile", &args).unwrap();
    assert!(approx(median, 50.0, 1e-9));

    let faster = registry
        .percentile("run_5k_percentile", &MetricArgs { value: 19.0, ..args })
        .unwrap();
    assert!(faster > median);

    let female = args.with_gender(Gender::Female);
    let p_female = registry.percentile("run_5k_percentile", &female).unwrap();
    assert!(p_female > median, "same time ranks higher on the women's table");

    let at_median = registry
        .value_at_percentile("run_5k_percentile", 50.0, &args)
        .unwrap();
    assert!(approx(at_median, 22.0, 1e-9));
}

#[test]
fn test_symptom_scales_invert() {
    let registry = standard_registry();
    let none = registry
        .percentile("anxiety_percentile", &MetricArgs::new(0.0))
        .unwrap();
    let severe = registry
        .percentile("anxiety_percentile", &MetricArgs::new(21.0))
        .unwrap();
    assert_eq!(none, 100.0);
    assert_eq!(severe, 0.0);

    let mid = registry
        .percentile("depression_percentile", &MetricArgs::new(7.0))
        .unwrap();
    assert!(approx(mid, 100.0 - 300.0 / 7.0, 1e-9));

    let score = registry
        .value_at_percentile("burnout_percentile", 100.0, &MetricArgs::new(0.0))
        .unwrap();
    assert_eq!(score, 0.0);
}

#[test]
fn test_evenly_spaced_emotional_tables() {
    let registry = standard_registry();
    // Fourth of eight points sits at 3/7 of the scale
    let p = registry
        .percentile("resilience_percentile", &MetricArgs::new(65.0))
        .unwrap();
    assert!(approx(p, 300.0 / 7.0, 1e-9));

    // Nine-point table: fifth point at the median
    let p = registry
        .percentile("optimism_percentile", &MetricArgs::new(65.0))
        .unwrap();
    assert!(approx(p, 50.0, 1e-9));
}

#[test]
fn test_sleep_hours_plateau() {
    let registry = standard_registry();
    let sleep = |hours| {
        registry
            .percentile("sleep_hours_percentile", &MetricArgs::new(hours))
            .unwrap()
    };
    assert!(approx(sleep(8.0), 99.0, 1e-9));
    assert!(approx(sleep(7.0), 90.0, 1e-9));
    assert!(approx(sleep(9.0), 90.0, 1e-9));
    assert!(approx(sleep(5.0), 100.0 / 7.0 * 0.8, 1e-9));
    assert!(sleep(5.0) < sleep(6.5));

    let hours = |p| {
        registry
            .value_at_percentile("sleep_hours_percentile", p, &MetricArgs::new(0.0))
            .unwrap()
    };
    assert!(approx(hours(99.0), 8.0, 1e-9));
    assert!(approx(hours(90.0), 7.0, 1e-9));
    assert!(hours(20.0) < 7.0);
}

#[test]
fn test_financial_and_social_metrics() {
    let registry = standard_registry();
    let income = registry
        .percentile("income_percentile", &MetricArgs::new(52_000.0))
        .unwrap();
    assert!(approx(income, 50.0, 1e-9));

    let top = registry
        .percentile("income_percentile", &MetricArgs::new(600_000.0))
        .unwrap();
    assert!(approx(top, 99.1, 1e-9));

    let social = registry
        .percentile("sociability_score_percentile", &MetricArgs::new(70.0))
        .unwrap();
    assert!(approx(social, 50.0, 1e-9));

    let eq = registry
        .percentile("emotional_intelligence_percentile", &MetricArgs::new(115.0))
        .unwrap();
    assert!(approx(eq, 84.134, 0.01));
}

#[test]
fn test_strength_ratio_uses_bodyweight() {
    let registry = standard_registry();
    let args = MetricArgs::new(180.0).with_bodyweight(180.0);
    let p = registry
        .percentile("strength_ratio_percentile", &args)
        .unwrap();
    assert!(approx(p, 400.0 / 7.0, 1e-9));
}

#[test]
fn test_percentiles_stay_in_range() {
    let registry = standard_registry();
    for metric in registry.metrics() {
        for value in [-1e6, 0.0, 1.0, 50.0, 1e9] {
            let p = registry.percentile(metric.name, &MetricArgs::new(value)).unwrap();
            assert!((0.0..=100.0).contains(&p), "{} at {value} -> {p}", metric.name);
        }
    }
}

#[test]
fn test_validate_definition_accepts_matching_roles() {
    let registry = standard_registry();
    let bench = MetricDefinition::new(strength(), "Bench Press", "lbs").with_function(
        "bench_press_percentile",
        [
            ParameterRole::Value,
            ParameterRole::Age,
            ParameterRole::Bodyweight,
        ],
    );
    assert!(registry.validate_definition(&bench).is_ok());

    let manual = MetricDefinition::new(strength(), "Grip Strength", "kg");
    assert!(registry.validate_definition(&manual).is_ok());
}

#[test]
fn test_validate_definition_rejects_mismatches() {
    let registry = standard_registry();

    let unknown = MetricDefinition::new(strength(), "Vertical Jump", "in")
        .with_function("vertical_jump_percentile", [ParameterRole::Value]);
    let err = registry.validate_definition(&unknown).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("vertical_jump_percentile"));

    let wrong_roles = MetricDefinition::new(strength(), "Squat", "lbs").with_function(
        "squat_percentile",
        [ParameterRole::Value, ParameterRole::Age],
    );
    assert!(registry.validate_definition(&wrong_roles).is_err());

    let reordered = MetricDefinition::new(strength(), "Squat", "lbs").with_function(
        "squat_percentile",
        [
            ParameterRole::Value,
            ParameterRole::Bodyweight,
            ParameterRole::Age,
        ],
    );
    assert!(registry.validate_definition(&reordered).is_err());

    let no_params = MetricDefinition::new(strength(), "Squat", "lbs")
        .with_function("squat_percentile", Vec::<ParameterRole>::new());
    assert!(registry.validate_definition(&no_params).is_err());

    let value_not_first = MetricDefinition::new(strength(), "Squat", "lbs").with_function(
        "squat_percentile",
        [
            ParameterRole::Age,
            ParameterRole::Value,
            ParameterRole::Bodyweight,
        ],
    );
    assert!(registry.validate_definition(&value_not_first).is_err());
}

#[test]
fn test_definition_deserializes_legacy_role_names() {
    let registry = standard_registry();
    let definition: MetricDefinition = serde_json::from_str(
        r#"{
            "category_path": "physical.cardio",
            "metric_name": "5K Time",
            "unit": "min",
            "percentile_function_name": "run_5k_percentile",
            "parameters": ["minutes", "age", "gender"]
        }"#,
    )
    .unwrap();
    assert_eq!(definition.parameters[0], ParameterRole::Value);
    assert!(registry.validate_definition(&definition).is_ok());
}
