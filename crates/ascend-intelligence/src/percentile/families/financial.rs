// ABOUTME: Registers net worth and income percentile functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use crate::percentile::model::MetricModel;
use crate::percentile::registry::{MetricFamily, RegistryBuilder, RegistryError};
use ascend_core::models::ParameterRole;

/// Register financial metrics
///
/// # Errors
///
/// Returns `RegistryError::Duplicate` if a name is already taken
pub fn register(registry: &mut RegistryBuilder) -> Result<(), RegistryError> {
    registry.register(
        "networth_percentile",
        "Net Worth (age-adjusted)",
        MetricFamily::Financial,
        &[ParameterRole::Value, ParameterRole::Age],
        MetricModel::NetWorth,
    )?;
    registry.register(
        "income_percentile",
        "Income",
        MetricFamily::Financial,
        &[ParameterRole::Value],
        MetricModel::Income,
    )
}
