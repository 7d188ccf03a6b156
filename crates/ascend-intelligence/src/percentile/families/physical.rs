// ABOUTME: Registers compound lifts, isolation lifts, 5K run time and strength ratio
// ABOUTME: Binds each lift to its normalization and benchmark table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use crate::percentile::benchmark::BenchmarkCurve;
use crate::percentile::model::MetricModel;
use crate::percentile::registry::{MetricFamily, RegistryBuilder, RegistryError};
use crate::percentile::tables::{compound, conditioning, isolation};
use ascend_core::models::ParameterRole;

/// Lift signature: weight, age, bodyweight
const LIFT_ROLES: &[ParameterRole] = &[
    ParameterRole::Value,
    ParameterRole::Age,
    ParameterRole::Bodyweight,
];

const RACE_ROLES: &[ParameterRole] = &[
    ParameterRole::Value,
    ParameterRole::Age,
    ParameterRole::Gender,
];

const RATIO_ROLES: &[ParameterRole] = &[ParameterRole::Value, ParameterRole::Bodyweight];

const COMPOUND_LIFTS: [(&str, &str, &[f64]); 7] = [
    ("bench_press_percentile", "Bench Press (weight/bodyweight)", &compound::BENCH_PRESS),
    ("squat_percentile", "Squat (weight/bodyweight)", &compound::SQUAT),
    ("deadlift_percentile", "Deadlift (weight/bodyweight)", &compound::DEADLIFT),
    ("shoulder_press_percentile", "Shoulder Press", &compound::SHOULDER_PRESS),
    ("lat_pulldown_percentile", "Lat Pulldown", &compound::LAT_PULLDOWN),
    ("seated_row_close_percentile", "Seated Row (Close)", &compound::SEATED_ROW_CLOSE),
    ("seated_row_wide_percentile", "Seated Row (Wide)", &compound::SEATED_ROW_WIDE),
];

const ISOLATION_LIFTS: [(&str, &str, &[f64]); 5] = [
    ("lateral_raise_percentile", "Lateral Raise", &isolation::LATERAL_RAISE),
    ("bicep_curl_percentile", "Bicep Curl", &isolation::BICEP_CURL),
    ("tricep_extension_percentile", "Tricep Extension", &isolation::TRICEP_EXTENSION),
    ("leg_extension_percentile", "Leg Extension", &isolation::LEG_EXTENSION),
    ("leg_curl_percentile", "Leg Curl", &isolation::LEG_CURL),
];

/// Register every physical metric
///
/// # Errors
///
/// Returns `RegistryError` for a malformed table or duplicate name
pub fn register(registry: &mut RegistryBuilder) -> Result<(), RegistryError> {
    for (name, label, values) in COMPOUND_LIFTS {
        let curve = RegistryBuilder::table(
            name,
            BenchmarkCurve::standard(values).and_then(BenchmarkCurve::log_scale),
        )?;
        registry.register(
            name,
            label,
            MetricFamily::CompoundLift,
            LIFT_ROLES,
            MetricModel::CompoundLift(curve),
        )?;
    }

    for (name, label, values) in ISOLATION_LIFTS {
        let curve = RegistryBuilder::table(name, BenchmarkCurve::standard(values))?;
        registry.register(
            name,
            label,
            MetricFamily::IsolationLift,
            LIFT_ROLES,
            MetricModel::IsolationLift(curve),
        )?;
    }

    let run = "run_5k_percentile";
    registry.register(
        run,
        "5K Run Time",
        MetricFamily::Conditioning,
        RACE_ROLES,
        MetricModel::RaceTime {
            male: RegistryBuilder::table(run, BenchmarkCurve::standard(&conditioning::RUN_5K_MALE))?,
            female: RegistryBuilder::table(
                run,
                BenchmarkCurve::standard(&conditioning::RUN_5K_FEMALE),
            )?,
        },
    )?;

    let ratio = "strength_ratio_percentile";
    registry.register(
        ratio,
        "Strength Ratio",
        MetricFamily::Conditioning,
        RATIO_ROLES,
        MetricModel::StrengthRatio(RegistryBuilder::table(
            ratio,
            BenchmarkCurve::uniform(&conditioning::STRENGTH_RATIO),
        )?),
    )?;

    Ok(())
}
