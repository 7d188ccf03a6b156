// ABOUTME: Registers normally distributed cognitive scores
// ABOUTME: IQ evaluated directly from the normal CDF, no benchmark table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use crate::percentile::model::MetricModel;
use crate::percentile::registry::{MetricFamily, RegistryBuilder, RegistryError};
use crate::percentile::tables::normal_scores::{MEAN, STD_DEV};
use ascend_core::models::ParameterRole;

/// Register cognitive metrics
///
/// # Errors
///
/// Returns `RegistryError::Duplicate` if a name is already taken
pub fn register(registry: &mut RegistryBuilder) -> Result<(), RegistryError> {
    registry.register(
        "iq_percentile",
        "IQ",
        MetricFamily::Cognitive,
        &[ParameterRole::Value],
        MetricModel::Normal {
            mean: MEAN,
            std_dev: STD_DEV,
        },
    )
}
