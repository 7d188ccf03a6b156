// ABOUTME: Distribution curve command for ascend-cli
// ABOUTME: Reads percentile samples from JSON and prints the smoothed curve and CDF
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use anyhow::{Context, Result};
use ascend::services::PercentileService;
use ascend_core::models::PercentileSample;
use chrono::Utc;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use crate::helpers::display::{print_distribution, print_json};

/// Accepts bare percentiles or full samples
#[derive(Deserialize)]
#[serde(untagged)]
enum SampleFile {
    Percentiles(Vec<f64>),
    Samples(Vec<PercentileSample>),
}

impl SampleFile {
    fn into_samples(self) -> Vec<PercentileSample> {
        match self {
            Self::Samples(samples) => samples,
            Self::Percentiles(percentiles) => {
                let now = Utc::now();
                percentiles
                    .into_iter()
                    .map(|p| PercentileSample::new(p, p, now))
                    .collect()
            }
        }
    }
}

/// Build and print a distribution from a sample file
pub async fn from_file(service: &PercentileService, path: &Path, json: bool) -> Result<()> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let samples = serde_json::from_str::<SampleFile>(&content)
        .with_context(|| format!("Expected a JSON array of samples in {}", path.display()))?
        .into_samples();

    let label = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("samples");
    let curve = service.distribution_for_samples(label, &samples);

    if json {
        return print_json(&curve);
    }
    print_distribution(&curve);
    if let Some(velocity) = service.velocity(&samples) {
        println!(
            "Velocity: {:+.1} points over {:.0} days ({:+.2}/month)",
            velocity.change, velocity.days, velocity.rate_per_month
        );
    }
    Ok(())
}
