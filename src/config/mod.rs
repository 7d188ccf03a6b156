// ABOUTME: Configuration module for the Ascend application shell
// ABOUTME: Environment-driven settings wrapping the engine's IntelligenceConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Configuration module
//!
//! - **Environment**: profile defaults, history query settings and logging
//! - **Intelligence**: engine tuning, re-exported from `ascend-intelligence`

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, Environment, HistoryConfig};
pub use ascend_intelligence::config::intelligence::ConfigError;
pub use ascend_intelligence::config::IntelligenceConfig;
