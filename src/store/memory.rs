// ABOUTME: In-memory store backed by DashMap for tests, the CLI and embedding
// ABOUTME: Implements profile, metric definition and sample sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use super::{
    MetricDefinitionSource, ProfileSource, SampleOrder, SampleQuery, SampleScope, SampleSource,
};
use ascend_core::errors::AppResult;
use ascend_core::models::{CategoryPath, MetricDefinition, PercentileSample, UserProfile};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Concurrent in-memory store
///
/// Cloning shares the underlying maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profiles: Arc<DashMap<Uuid, UserProfile>>,
    definitions: Arc<DashMap<String, MetricDefinition>>,
    samples: Arc<DashMap<(Uuid, String), Vec<PercentileSample>>>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user profile
    pub fn put_profile(&self, user_id: Uuid, profile: UserProfile) {
        self.profiles.insert(user_id, profile);
    }

    /// Insert or replace a metric definition, keyed by metric name
    pub fn put_definition(&self, definition: MetricDefinition) {
        self.definitions
            .insert(definition.metric_name.clone(), definition);
    }

    /// Append a sample to a user's history for a metric
    pub fn record_sample(&self, user_id: Uuid, metric_name: &str, sample: PercentileSample) {
        self.samples
            .entry((user_id, metric_name.to_owned()))
            .or_default()
            .push(sample);
    }

    /// Metric names whose definition lies under `path`
    fn metrics_under(&self, path: &CategoryPath) -> Vec<String> {
        self.definitions
            .iter()
            .filter(|entry| path.contains(&entry.value().category_path))
            .map(|entry| entry.key().clone())
            .collect()
    }
}

#[async_trait]
impl ProfileSource for MemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.get(&user_id).map(|p| p.value().clone()))
    }
}

#[async_trait]
impl MetricDefinitionSource for MemoryStore {
    async fn get_definition(&self, metric_name: &str) -> AppResult<Option<MetricDefinition>> {
        Ok(self
            .definitions
            .get(metric_name)
            .map(|d| d.value().clone()))
    }

    async fn list_definitions(
        &self,
        scope: Option<&CategoryPath>,
    ) -> AppResult<Vec<MetricDefinition>> {
        let mut definitions: Vec<MetricDefinition> = self
            .definitions
            .iter()
            .filter(|entry| scope.is_none_or(|path| path.contains(&entry.value().category_path)))
            .map(|entry| entry.value().clone())
            .collect();
        definitions.sort_by(|a, b| {
            (&a.category_path, &a.metric_name).cmp(&(&b.category_path, &b.metric_name))
        });
        Ok(definitions)
    }
}

#[async_trait]
impl SampleSource for MemoryStore {
    async fn recent_samples(
        &self,
        user_id: Uuid,
        query: &SampleQuery,
    ) -> AppResult<Vec<PercentileSample>> {
        let metrics = match &query.scope {
            SampleScope::Metric(name) => vec![name.clone()],
            SampleScope::Category(path) => self.metrics_under(path),
        };

        let mut samples: Vec<PercentileSample> = metrics
            .into_iter()
            .filter_map(|metric| self.samples.get(&(user_id, metric)))
            .flat_map(|history| history.value().clone())
            .collect();

        samples.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        samples.truncate(query.limit);
        if query.order == SampleOrder::OldestFirst {
            samples.reverse();
        }
        Ok(samples)
    }

    async fn count_samples(&self, user_id: Uuid) -> AppResult<usize> {
        Ok(self
            .samples
            .iter()
            .filter(|entry| entry.key().0 == user_id)
            .map(|entry| entry.value().len())
            .sum())
    }
}
