// ABOUTME: Registers emotional intelligence and mental-health scale metrics
// ABOUTME: Evenly anchored legacy tables; anxiety, depression and burnout rank lower-is-better
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use crate::percentile::benchmark::BenchmarkCurve;
use crate::percentile::model::{Direction, MetricModel};
use crate::percentile::registry::{MetricFamily, RegistryBuilder, RegistryError};
use crate::percentile::tables::conditioning::SLEEP_HOURS;
use crate::percentile::tables::emotional as t;
use crate::percentile::tables::normal_scores::{MEAN, STD_DEV};
use ascend_core::models::ParameterRole;

const VALUE_ONLY: &[ParameterRole] = &[ParameterRole::Value];

/// Higher score ranks higher
static POSITIVE_SCALES: [(&str, &str, &[f64]); 15] = [
    ("stress_management_percentile", "Stress Management", &t::STRESS_MANAGEMENT),
    ("resilience_percentile", "Resilience", &t::RESILIENCE),
    ("meditation_percentile", "Meditation (min/day)", &t::MEDITATION),
    ("sleep_quality_percentile", "Sleep Quality", &t::SLEEP_QUALITY),
    ("life_satisfaction_percentile", "Life Satisfaction", &t::LIFE_SATISFACTION),
    ("positive_affect_percentile", "Positive Affect", &t::POSITIVE_AFFECT),
    ("gratitude_percentile", "Gratitude", &t::GRATITUDE),
    ("self_awareness_percentile", "Self Awareness", &t::SELF_AWARENESS),
    ("emotional_regulation_percentile", "Emotional Regulation", &t::EMOTIONAL_REGULATION),
    ("therapy_sessions_percentile", "Therapy Sessions", &t::THERAPY_SESSIONS),
    ("work_life_balance_percentile", "Work-Life Balance", &t::WORK_LIFE_BALANCE),
    ("social_support_percentile", "Social Support", &t::SOCIAL_SUPPORT),
    ("mindfulness_percentile", "Mindfulness", &t::MINDFULNESS),
    ("emotional_vocabulary_percentile", "Emotional Vocabulary", &t::EMOTIONAL_VOCABULARY),
    ("optimism_percentile", "Optimism", &t::OPTIMISM),
];

/// Symptom scales: lower score ranks higher
static SYMPTOM_SCALES: [(&str, &str, &[f64]); 3] = [
    ("anxiety_percentile", "Anxiety", &t::ANXIETY),
    ("depression_percentile", "Depression", &t::DEPRESSION),
    ("burnout_percentile", "Burnout", &t::BURNOUT),
];

/// Register emotional metrics
///
/// # Errors
///
/// Returns `RegistryError` for a malformed table or duplicate name
pub fn register(registry: &mut RegistryBuilder) -> Result<(), RegistryError> {
    registry.register(
        "emotional_intelligence_percentile",
        "Emotional Intelligence Score",
        MetricFamily::Emotional,
        VALUE_ONLY,
        MetricModel::Normal {
            mean: MEAN,
            std_dev: STD_DEV,
        },
    )?;

    let scales = POSITIVE_SCALES
        .iter()
        .map(|entry| (entry, Direction::HigherIsBetter))
        .chain(
            SYMPTOM_SCALES
                .iter()
                .map(|entry| (entry, Direction::LowerIsBetter)),
        );
    for (&(name, label, values), direction) in scales {
        let curve = RegistryBuilder::table(name, BenchmarkCurve::uniform(values))?;
        registry.register(
            name,
            label,
            MetricFamily::Emotional,
            VALUE_ONLY,
            MetricModel::Score { curve, direction },
        )?;
    }

    let sleep = "sleep_hours_percentile";
    registry.register(
        sleep,
        "Sleep Hours",
        MetricFamily::Emotional,
        VALUE_ONLY,
        MetricModel::SleepHours(RegistryBuilder::table(
            sleep,
            BenchmarkCurve::uniform(&SLEEP_HOURS),
        )?),
    )
}
