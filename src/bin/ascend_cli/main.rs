// ABOUTME: Ascend CLI - command-line front end to the percentile engine
// ABOUTME: Percentile and inverse lookups, registry listing, distributions, net worth tables, validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors
//!
//! Usage:
//! ```bash
//! # Percentile of a 225 lb bench press at 180 lb bodyweight, age 25
//! ascend-cli percentile bench_press_percentile 225 --age 25 --bodyweight 180
//!
//! # Raw value at the 90th percentile
//! ascend-cli value-at run_5k_percentile 90 --age 40 --gender female
//!
//! # List registered functions
//! ascend-cli list --family financial
//!
//! # Distribution curve from a JSON file of samples
//! ascend-cli distribution samples.json
//!
//! # Net worth by percentile for one age group
//! ascend-cli networth --age-group 30s
//!
//! # Validate metric definitions
//! ascend-cli validate metrics.yaml
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use ascend::config::AppConfig;
use ascend::logging::LoggingConfig;
use ascend::services::PercentileService;
use ascend_core::models::{Gender, UserProfile, WeightUnit};
use ascend_intelligence::percentile::AgeGroup;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "ascend-cli",
    about = "Ascend percentile engine CLI",
    long_about = "Convert raw measurements to population percentiles and back, inspect the metric registry, and build distribution curves."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Profile fields shared by lookup commands
#[derive(Args, Clone)]
struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Gender (male or female)
    #[arg(long)]
    gender: Option<Gender>,

    /// Bodyweight in --unit
    #[arg(long)]
    bodyweight: Option<f64>,

    /// Weight unit for bodyweight and lift weights (lbs or kg)
    #[arg(long, default_value = "lbs")]
    unit: WeightUnit,
}

impl ProfileArgs {
    fn to_profile(&self) -> UserProfile {
        UserProfile {
            age: self.age,
            gender: self.gender,
            bodyweight: self.bodyweight,
            bodyweight_unit: self.unit,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Percentile of a raw value
    Percentile {
        /// Registered function, e.g. `iq_percentile`
        function: String,

        /// Raw measurement
        value: f64,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Raw value at a percentile
    ValueAt {
        /// Registered function, e.g. `squat_percentile`
        function: String,

        /// Percentile on the 0-100 scale
        percentile: f64,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// List registered percentile functions
    List {
        /// Only show one family (e.g. `compound_lift`, `emotional`)
        #[arg(long)]
        family: Option<String>,
    },

    /// Build a distribution curve from a JSON file of samples
    Distribution {
        /// JSON array of percentiles or of `{value, percentile, recorded_at}` objects
        file: PathBuf,
    },

    /// Net worth at standard percentiles for an age group
    Networth {
        /// Age group (20s, 30s, 40s, 50s, 60s)
        #[arg(long, default_value = "30s")]
        age_group: AgeGroup,
    },

    /// Validate metric definitions from a JSON or YAML file
    Validate {
        /// File with a list of metric definitions
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    debug!(config = %config.summary(), "configuration loaded");
    let service = PercentileService::from_config(&config).context("Failed to build metric registry")?;

    match cli.command {
        Command::Percentile {
            function,
            value,
            profile,
        } => commands::lookup::percentile(&service, &function, value, &profile.to_profile(), cli.json),
        Command::ValueAt {
            function,
            percentile,
            profile,
        } => commands::lookup::value_at(
            &service,
            &function,
            percentile,
            &profile.to_profile(),
            cli.json,
        ),
        Command::List { family } => commands::registry::list(&service, family.as_deref(), cli.json),
        Command::Distribution { file } => {
            commands::distribution::from_file(&service, &file, cli.json).await
        }
        Command::Networth { age_group } => commands::wealth::networth_table(&service, age_group, cli.json),
        Command::Validate { file } => commands::registry::validate(&service, &file, cli.json).await,
    }
}
