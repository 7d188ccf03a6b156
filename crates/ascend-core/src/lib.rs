// ABOUTME: Core types and constants for the Ascend percentile engine
// ABOUTME: Foundation crate with error handling, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

#![deny(unsafe_code)]

//! # Ascend Core
//!
//! Foundation crate providing shared types and constants for the Ascend
//! self-tracking engine. It changes rarely, so the heavier crates above it
//! keep their incremental compilation benefits.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Profile defaults, percentile anchors, units and env keys
//! - **models**: Profile, metric definition, sample and category path types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `MetricDefinition`, `PercentileSample`, ...)
pub mod models;
