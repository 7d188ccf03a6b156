// ABOUTME: Output formatting helpers for ascend-cli
// ABOUTME: Tables for lookups, registry listings, validation reports and distribution curves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use anyhow::Result;
use ascend_core::models::{MetricDefinition, ParameterRole};
use ascend_intelligence::distribution::{CurveSource, DistributionCurve};
use ascend_intelligence::percentile::{AgeGroup, RegisteredMetric};
use serde::Serialize;

const BAR_WIDTH: f64 = 40.0;

/// Pretty-print any serializable value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One lookup result
pub fn print_lookup(function: &str, value: f64, percentile: f64, zone: &str) {
    println!("{function}");
    println!("   Value:      {value:.2}");
    println!("   Percentile: {percentile:.1}");
    println!("   Zone:       {zone}");
}

/// Registry listing
pub fn print_metric_table(metrics: &[&RegisteredMetric]) {
    println!("{:<40} {:<16} {:<32} Parameters", "Function", "Family", "Label");
    println!("{}", "=".repeat(110));
    for metric in metrics {
        let roles: Vec<&str> = metric.roles.iter().map(ParameterRole::as_str).collect();
        println!(
            "{:<40} {:<16} {:<32} {}",
            metric.name,
            metric.family,
            metric.label,
            roles.join(", ")
        );
    }
    println!("\n{} functions registered", metrics.len());
}

/// Validation report, one line per definition
pub fn print_validation(results: &[(&MetricDefinition, Option<String>)]) {
    for (definition, error) in results {
        match error {
            None => println!("OK       {}", definition.metric_name),
            Some(message) => println!("INVALID  {}: {message}", definition.metric_name),
        }
    }
}

/// Density as a horizontal bar chart every 5 buckets, plus CDF checkpoints
pub fn print_distribution(curve: &DistributionCurve) {
    let source = match curve.source {
        CurveSource::Empirical => "empirical",
        CurveSource::Canonical => "canonical normal (too few samples)",
    };
    println!("Distribution from {} samples: {source}", curve.sample_count);
    println!("Peak at percentile {}", curve.peak_bucket());
    println!("{}", "=".repeat(60));
    for (bucket, density) in curve.curve.iter().enumerate().step_by(5) {
        let cdf = curve.cdf.get(bucket).copied().unwrap_or_default();
        let bar = "#".repeat((density / 100.0 * BAR_WIDTH).round() as usize);
        println!("{bucket:>3} | {bar:<40} | cdf {cdf:>5.1}");
    }
}

/// Net worth per percentile for one cohort
pub fn print_networth_table(group: AgeGroup, rows: &[(f64, f64)]) {
    println!("Net worth by percentile, age group {group}");
    println!("{}", "=".repeat(36));
    for (percentile, value) in rows {
        println!("  p{percentile:<6} {value:>20.0}");
    }
}
