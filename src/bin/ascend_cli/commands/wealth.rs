// ABOUTME: Net worth table command for ascend-cli
// ABOUTME: Prints net worth at reference percentiles for one age cohort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use anyhow::Result;
use ascend::services::PercentileService;
use ascend_intelligence::percentile::{AgeGroup, NetWorthModel};
use serde_json::json;

use crate::helpers::display::{print_json, print_networth_table};

const REFERENCE_PERCENTILES: [f64; 10] = [1.0, 10.0, 25.0, 50.0, 75.0, 90.0, 95.0, 99.0, 99.5, 99.9];

/// Net worth at each reference percentile
pub fn networth_table(service: &PercentileService, group: AgeGroup, json: bool) -> Result<()> {
    let model = NetWorthModel::new(&service.config().wealth);
    let rows: Vec<(f64, f64)> = REFERENCE_PERCENTILES
        .iter()
        .map(|&p| (p, model.value_at(p, group)))
        .collect();

    if json {
        let rows: Vec<_> = rows
            .iter()
            .map(|(p, v)| json!({ "percentile": p, "net_worth": v }))
            .collect();
        return print_json(&json!({ "age_group": group, "rows": rows }));
    }
    print_networth_table(group, &rows);
    Ok(())
}
