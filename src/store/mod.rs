// ABOUTME: Store seam between the percentile engine and the application's persistence
// ABOUTME: Async source traits for profiles, metric definitions and percentile history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Store abstraction
//!
//! The engine never owns persistence. The application shell implements these
//! traits over its backend; [`MemoryStore`] serves tests and the CLI.

/// In-memory implementation
pub mod memory;

pub use memory::MemoryStore;

use ascend_core::errors::{AppError, AppResult};
use ascend_core::models::{CategoryPath, MetricDefinition, PercentileSample, UserProfile};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Time order of a history query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleOrder {
    /// Oldest sample first
    OldestFirst,
    /// Newest sample first
    NewestFirst,
}

impl fmt::Display for SampleOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OldestFirst => "asc",
            Self::NewestFirst => "desc",
        })
    }
}

impl FromStr for SampleOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "oldest_first" => Ok(Self::OldestFirst),
            "desc" | "descending" | "newest_first" => Ok(Self::NewestFirst),
            other => Err(AppError::invalid_input(format!(
                "Unknown sample order: '{other}'. Valid options: asc, desc"
            ))),
        }
    }
}

/// What a history query selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleScope {
    /// One metric by name
    Metric(String),
    /// Every metric whose category lies under this path
    Category(CategoryPath),
}

/// History query; limit and order are caller-supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleQuery {
    /// Selection
    pub scope: SampleScope,
    /// Maximum samples returned (most recent ones)
    pub limit: usize,
    /// Order of the returned samples
    pub order: SampleOrder,
}

impl SampleQuery {
    /// Query one metric
    pub fn metric(name: impl Into<String>, limit: usize, order: SampleOrder) -> Self {
        Self {
            scope: SampleScope::Metric(name.into()),
            limit,
            order,
        }
    }

    /// Query a category subtree
    #[must_use]
    pub const fn category(path: CategoryPath, limit: usize, order: SampleOrder) -> Self {
        Self {
            scope: SampleScope::Category(path),
            limit,
            order,
        }
    }
}

/// Read access to user profiles
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Profile for a user, `None` if unknown
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;
}

/// Read access to metric definitions
#[async_trait]
pub trait MetricDefinitionSource: Send + Sync {
    /// Definition by metric name
    async fn get_definition(&self, metric_name: &str) -> AppResult<Option<MetricDefinition>>;

    /// Definitions under a category path (all when `None`)
    async fn list_definitions(
        &self,
        scope: Option<&CategoryPath>,
    ) -> AppResult<Vec<MetricDefinition>>;
}

/// Read access to percentile history
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Up to `query.limit` most recent samples in `query.order`
    async fn recent_samples(
        &self,
        user_id: Uuid,
        query: &SampleQuery,
    ) -> AppResult<Vec<PercentileSample>>;

    /// Total samples recorded by a user across every metric
    async fn count_samples(&self, user_id: Uuid) -> AppResult<usize>;
}
