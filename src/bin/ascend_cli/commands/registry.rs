// ABOUTME: Registry inspection and metric definition validation for ascend-cli
// ABOUTME: Lists registered functions and checks definition files against the registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use anyhow::{bail, Context, Result};
use ascend::services::PercentileService;
use ascend_core::models::MetricDefinition;
use serde_json::json;
use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::helpers::display::{print_json, print_metric_table, print_validation};

/// List registered functions, optionally filtered by family label
pub fn list(service: &PercentileService, family: Option<&str>, json: bool) -> Result<()> {
    let metrics: Vec<_> = service
        .registry()
        .metrics()
        .into_iter()
        .filter(|m| family.is_none_or(|f| m.family.as_str() == f))
        .collect();

    if metrics.is_empty() {
        bail!("No metrics registered for family '{}'", family.unwrap_or_default());
    }

    if json {
        let rows: Vec<_> = metrics
            .iter()
            .map(|m| {
                json!({
                    "name": m.name,
                    "label": m.label,
                    "family": m.family,
                    "parameters": m.roles,
                })
            })
            .collect();
        return print_json(&rows);
    }
    print_metric_table(&metrics);
    Ok(())
}

async fn load_definitions(path: &Path) -> Result<Vec<MetricDefinition>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML in {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))
    }
}

/// Validate every definition in a file; fails if any is rejected
pub async fn validate(service: &PercentileService, path: &Path, json: bool) -> Result<()> {
    let definitions = load_definitions(path).await?;
    info!(count = definitions.len(), file = %path.display(), "validating metric definitions");

    let results: Vec<(&MetricDefinition, Option<String>)> = definitions
        .iter()
        .map(|d| (d, service.validate_definition(d).err().map(|e| e.to_string())))
        .collect();
    let failures = results.iter().filter(|(_, err)| err.is_some()).count();

    if json {
        let rows: Vec<_> = results
            .iter()
            .map(|(d, err)| {
                json!({
                    "metric": d.metric_name,
                    "function": d.percentile_function,
                    "valid": err.is_none(),
                    "error": err,
                })
            })
            .collect();
        print_json(&rows)?;
    } else {
        print_validation(&results);
    }

    if failures > 0 {
        bail!("{failures} of {} metric definitions are invalid", definitions.len());
    }
    Ok(())
}
