// ABOUTME: Main library entry point for the Ascend self-tracking engine
// ABOUTME: Wires configuration, logging, the store seam and services around the percentile core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

#![deny(unsafe_code)]

//! # Ascend
//!
//! Application-shell seams around the percentile/value conversion engine in
//! [`ascend_intelligence`]. A raw measurement plus a user profile goes in, a
//! population percentile comes out, and the same machinery runs backwards for
//! "what value sits at percentile X".
//!
//! ## Architecture
//!
//! - **Config**: environment-driven settings and engine tuning
//! - **Logging**: `tracing` subscriber setup and structured log helpers
//! - **Store**: async traits for profiles, metric definitions and history
//! - **Services**: `PercentileService` and `DashboardService` facades
//!
//! ## Example Usage
//!
//! ```rust
//! use ascend::config::AppConfig;
//! use ascend::services::PercentileService;
//! use ascend_core::models::UserProfile;
//!
//! # fn main() -> ascend_core::errors::AppResult<()> {
//! let service = PercentileService::from_config(&AppConfig::default())?;
//! let iq = service.compute_percentile("iq_percentile", 130.0, &UserProfile::new());
//! assert!(iq.is_some_and(|p| (p - 97.7).abs() < 0.1));
//! # Ok(())
//! # }
//! ```

/// Environment configuration
pub mod config;

/// Logging setup and structured log helpers
pub mod logging;

/// Service facades
pub mod services;

/// Store seam and in-memory implementation
pub mod store;

pub use ascend_core::errors::{AppError, AppResult, ErrorCode};
pub use ascend_intelligence::{IntelligenceConfig, MetricArgs, MetricRegistry};
