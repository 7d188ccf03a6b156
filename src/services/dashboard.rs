// ABOUTME: Dashboard service composing the store seam with the percentile service
// ABOUTME: Per-user metric percentiles, distribution curves, trends, goals and category summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use super::percentile::PercentileService;
use crate::config::HistoryConfig;
use crate::store::{
    MetricDefinitionSource, ProfileSource, SampleOrder, SampleQuery, SampleSource,
};
use ascend_core::errors::{AppError, AppResult};
use ascend_core::models::{CategoryPath, MetricDefinition, PercentileSample, UserProfile};
use ascend_intelligence::achievements::{self, Achievement, AchievementStatus};
use ascend_intelligence::distribution::DistributionCurve;
use ascend_intelligence::goals::GoalProgress;
use ascend_intelligence::trends::{
    self, AggregationScale, DropWarning, PercentileZone, PeriodAggregate, Projection, Velocity,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Latest standing of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStanding {
    /// Category path
    pub category: CategoryPath,
    /// Mean of each metric's most recent percentile
    pub latest: f64,
    /// `latest` minus the mean of each metric's previous percentile
    pub delta: Option<f64>,
    /// Metrics contributing to `latest`
    pub metrics: usize,
    /// Zone of `latest`
    pub zone: PercentileZone,
}

/// Weighted roll-up across categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Weighted overall percentile
    pub overall: f64,
    /// Categories that have at least one recorded percentile
    pub standings: Vec<CategoryStanding>,
    /// Categories whose standing dropped sharply
    pub warnings: Vec<DropWarning>,
}

fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

/// Per-user dashboard computations
pub struct DashboardService<S> {
    store: Arc<S>,
    percentiles: PercentileService,
    history: HistoryConfig,
}

impl<S> DashboardService<S>
where
    S: ProfileSource + MetricDefinitionSource + SampleSource,
{
    /// Create a dashboard service
    pub const fn new(store: Arc<S>, percentiles: PercentileService, history: HistoryConfig) -> Self {
        Self {
            store,
            percentiles,
            history,
        }
    }

    /// Underlying percentile service
    pub const fn percentiles(&self) -> &PercentileService {
        &self.percentiles
    }

    async fn profile(&self, user_id: Uuid) -> AppResult<UserProfile> {
        Ok(self.store.get_profile(user_id).await?.unwrap_or_else(|| {
            debug!(%user_id, "no profile stored, using defaults");
            UserProfile::default()
        }))
    }

    async fn definition(&self, metric_name: &str) -> AppResult<MetricDefinition> {
        self.store
            .get_definition(metric_name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Metric '{metric_name}'")))
    }

    async fn history_for(&self, user_id: Uuid, metric_name: &str) -> AppResult<Vec<PercentileSample>> {
        let query = SampleQuery::metric(metric_name, self.history.limit, self.history.order);
        self.store.recent_samples(user_id, &query).await
    }

    /// Percentile of a raw value for a user's metric
    ///
    /// `Ok(None)` for manual-entry metrics.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown metric, or store errors
    pub async fn metric_percentile(
        &self,
        user_id: Uuid,
        metric_name: &str,
        raw_value: f64,
    ) -> AppResult<Option<f64>> {
        let definition = self.definition(metric_name).await?;
        let profile = self.profile(user_id).await?;
        Ok(self
            .percentiles
            .percentile_for_definition(&definition, raw_value, &profile))
    }

    /// Raw value at a percentile for a user's metric
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown metric, or store errors
    pub async fn value_at_percentile(
        &self,
        user_id: Uuid,
        metric_name: &str,
        percentile: f64,
    ) -> AppResult<Option<f64>> {
        let definition = self.definition(metric_name).await?;
        let profile = self.profile(user_id).await?;
        Ok(self
            .percentiles
            .value_for_definition(&definition, percentile, &profile))
    }

    /// Distribution curve over a metric's recent history
    ///
    /// # Errors
    ///
    /// Returns store errors
    pub async fn metric_distribution(
        &self,
        user_id: Uuid,
        metric_name: &str,
    ) -> AppResult<DistributionCurve> {
        let samples = self.history_for(user_id, metric_name).await?;
        Ok(self
            .percentiles
            .distribution_for_samples(metric_name, &samples))
    }

    /// Distribution curve over every metric under a category
    ///
    /// # Errors
    ///
    /// Returns store errors
    pub async fn category_distribution(
        &self,
        user_id: Uuid,
        category: &CategoryPath,
    ) -> AppResult<DistributionCurve> {
        let query = SampleQuery::category(category.clone(), self.history.limit, self.history.order);
        let samples = self.store.recent_samples(user_id, &query).await?;
        Ok(self
            .percentiles
            .distribution_for_samples(category.as_str(), &samples))
    }

    /// Velocity of a metric's recent history
    ///
    /// # Errors
    ///
    /// Returns store errors
    pub async fn metric_velocity(&self, user_id: Uuid, metric_name: &str) -> AppResult<Option<Velocity>> {
        let samples = self.history_for(user_id, metric_name).await?;
        Ok(self.percentiles.velocity(&samples))
    }

    /// Linear projection of a metric's recent history
    ///
    /// # Errors
    ///
    /// Returns store errors
    pub async fn metric_projection(
        &self,
        user_id: Uuid,
        metric_name: &str,
    ) -> AppResult<Option<Projection>> {
        let samples = self.history_for(user_id, metric_name).await?;
        Ok(self.percentiles.projection(&samples))
    }

    /// Progress of a metric's latest percentile toward a target
    ///
    /// `Ok(None)` when nothing is recorded or the target is not positive.
    ///
    /// # Errors
    ///
    /// Returns store errors
    pub async fn goal_progress(
        &self,
        user_id: Uuid,
        metric_name: &str,
        target: f64,
    ) -> AppResult<Option<GoalProgress>> {
        let query = SampleQuery::metric(metric_name, 1, SampleOrder::NewestFirst);
        let latest = self.store.recent_samples(user_id, &query).await?;
        Ok(latest
            .first()
            .and_then(|sample| sample.percentile)
            .and_then(|current| self.percentiles.goal_progress(current, target)))
    }

    /// History of a metric averaged per period
    ///
    /// Reads the configured history window, then groups it by `scale`.
    ///
    /// # Errors
    ///
    /// Returns store errors
    pub async fn metric_history(
        &self,
        user_id: Uuid,
        metric_name: &str,
        scale: AggregationScale,
    ) -> AppResult<Vec<PeriodAggregate>> {
        let samples = self.history_for(user_id, metric_name).await?;
        Ok(trends::aggregate(&samples, scale))
    }

    /// Standing of one category with its previous mean percentile
    ///
    /// `None` when none of its metrics has a percentile.
    async fn standing(
        &self,
        user_id: Uuid,
        category: &CategoryPath,
    ) -> AppResult<Option<(CategoryStanding, Option<f64>)>> {
        let mut latest = Vec::new();
        let mut previous = Vec::new();
        for definition in self.store.list_definitions(Some(category)).await? {
            let query = SampleQuery::metric(definition.metric_name, 2, SampleOrder::NewestFirst);
            let recent = self.store.recent_samples(user_id, &query).await?;
            latest.extend(recent.first().and_then(|s| s.percentile));
            previous.extend(recent.get(1).and_then(|s| s.percentile));
        }

        let Some(current) = mean(&latest) else {
            return Ok(None);
        };
        let before = mean(&previous);
        let standing = CategoryStanding {
            category: category.clone(),
            latest: current,
            delta: before.map(|p| current - p),
            metrics: latest.len(),
            zone: self.percentiles.zone(current),
        };
        Ok(Some((standing, before)))
    }

    /// Roll up each category's standing
    ///
    /// A category stands at the mean of its metrics' latest percentiles.
    /// Categories without recorded percentiles are skipped.
    ///
    /// # Errors
    ///
    /// Returns store errors
    pub async fn summary(
        &self,
        user_id: Uuid,
        categories: &[CategoryPath],
        weights: &HashMap<String, f64>,
    ) -> AppResult<DashboardSummary> {
        let mut standings = Vec::new();
        let mut warnings = Vec::new();

        for category in categories {
            let Some((standing, before)) = self.standing(user_id, category).await? else {
                continue;
            };
            if let Some(before) = before {
                warnings.extend(self.percentiles.detect_drop(
                    category.as_str(),
                    before,
                    standing.latest,
                ));
            }
            standings.push(standing);
        }

        let scored = scored_categories(&standings);
        Ok(DashboardSummary {
            overall: self.percentiles.overall_score(&scored, weights),
            standings,
            warnings,
        })
    }

    /// Unlock state of `catalog` for a user
    ///
    /// Category conditions read the same standings as [`Self::summary`].
    ///
    /// # Errors
    ///
    /// Returns store errors
    pub async fn achievements(
        &self,
        user_id: Uuid,
        categories: &[CategoryPath],
        catalog: &[Achievement],
    ) -> AppResult<Vec<AchievementStatus>> {
        let entries = self.store.count_samples(user_id).await?;
        let mut standings = Vec::new();
        for category in categories {
            if let Some((standing, _)) = self.standing(user_id, category).await? {
                standings.push(standing);
            }
        }
        Ok(achievements::evaluate(
            catalog,
            entries,
            &scored_categories(&standings),
        ))
    }
}

fn scored_categories(standings: &[CategoryStanding]) -> Vec<(String, f64)> {
    standings
        .iter()
        .map(|s| (s.category.to_string(), s.latest))
        .collect()
}
