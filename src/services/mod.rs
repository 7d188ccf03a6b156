// ABOUTME: Service layer exposing the percentile engine to rendering and dashboard code
// ABOUTME: PercentileService wraps the registry; DashboardService adds the store seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Service layer
//!
//! Protocol-agnostic facades over the engine, reusable by any UI or API shell.

/// Per-user dashboard computations over a store
pub mod dashboard;

/// Forward and inverse percentile lookups
pub mod percentile;

pub use dashboard::{CategoryStanding, DashboardService, DashboardSummary};
pub use percentile::PercentileService;
