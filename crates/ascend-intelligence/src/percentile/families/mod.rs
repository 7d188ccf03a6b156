// ABOUTME: Per-family registration modules populating the metric registry
// ABOUTME: Physical, cognitive, financial, emotional and social metric families
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

/// IQ-style normally distributed scores
pub mod cognitive;
/// Emotional and mental-health scales
pub mod emotional;
/// Net worth and income
pub mod financial;
/// Lifts, running and strength ratio
pub mod physical;
/// Social scales
pub mod social;
