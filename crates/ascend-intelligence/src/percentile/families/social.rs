// ABOUTME: Registers social metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use crate::percentile::benchmark::BenchmarkCurve;
use crate::percentile::model::{Direction, MetricModel};
use crate::percentile::registry::{MetricFamily, RegistryBuilder, RegistryError};
use crate::percentile::tables::social::SOCIABILITY;
use ascend_core::models::ParameterRole;

/// Register social metrics
///
/// # Errors
///
/// Returns `RegistryError` for a malformed table or duplicate name
pub fn register(registry: &mut RegistryBuilder) -> Result<(), RegistryError> {
    let name = "sociability_score_percentile";
    registry.register(
        name,
        "Sociability Score",
        MetricFamily::Social,
        &[ParameterRole::Value],
        MetricModel::Score {
            curve: RegistryBuilder::table(name, BenchmarkCurve::standard(&SOCIABILITY))?,
            direction: Direction::HigherIsBetter,
        },
    )
}
