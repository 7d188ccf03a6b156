// ABOUTME: Forward and inverse percentile lookups for ascend-cli
// ABOUTME: Resolves a registered function and prints the result with its zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use anyhow::{bail, Result};
use ascend::services::PercentileService;
use ascend_core::models::UserProfile;
use serde_json::json;

use crate::helpers::display::{print_json, print_lookup};

/// Percentile of a raw value
pub fn percentile(
    service: &PercentileService,
    function: &str,
    value: f64,
    profile: &UserProfile,
    json: bool,
) -> Result<()> {
    let Some(percentile) = service.compute_percentile(function, value, profile) else {
        bail!("No percentile function registered as '{function}'");
    };
    let zone = service.zone(percentile);

    if json {
        return print_json(&json!({
            "function": function,
            "value": value,
            "percentile": percentile,
            "zone": zone,
        }));
    }
    print_lookup(function, value, percentile, zone.label());
    Ok(())
}

/// Raw value at a percentile
pub fn value_at(
    service: &PercentileService,
    function: &str,
    percentile: f64,
    profile: &UserProfile,
    json: bool,
) -> Result<()> {
    let Some(value) = service.compute_value_at_percentile(function, percentile, profile) else {
        bail!("No percentile function registered as '{function}'");
    };

    if json {
        return print_json(&json!({
            "function": function,
            "percentile": percentile,
            "value": value,
        }));
    }
    print_lookup(function, value, percentile, service.zone(percentile).label());
    Ok(())
}
