// ABOUTME: Configuration module for ascend-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

/// Engine configuration (normalization, wealth, distribution, trends)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
