// ABOUTME: Static benchmark tables for every registered metric
// ABOUTME: Values at fixed percentile anchors, grouped by metric family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Benchmark tables
//!
//! Tables are ascending. Seven-value tables sit on the standard anchors
//! `[1, 10, 25, 50, 75, 90, 99]`; any other length is spread evenly across
//! `0..=100`. For lower-is-better metrics the percentile is inverted after
//! lookup.

/// Compound lifts: adjusted lift/bodyweight ratio at standard anchors
pub mod compound {
    /// Barbell bench press
    pub const BENCH_PRESS: [f64; 7] = [0.30, 0.45, 0.55, 0.65, 0.75, 0.95, 1.40];
    /// Back squat
    pub const SQUAT: [f64; 7] = [0.40, 0.60, 0.75, 0.90, 1.10, 1.35, 1.90];
    /// Conventional deadlift
    pub const DEADLIFT: [f64; 7] = [0.50, 0.75, 0.90, 1.10, 1.35, 1.65, 2.25];
    /// Standing overhead press
    pub const SHOULDER_PRESS: [f64; 7] = [0.20, 0.30, 0.38, 0.45, 0.55, 0.68, 0.90];
    /// Lat pulldown
    pub const LAT_PULLDOWN: [f64; 7] = [0.35, 0.50, 0.60, 0.70, 0.82, 0.95, 1.20];
    /// Seated cable row, close grip
    pub const SEATED_ROW_CLOSE: [f64; 7] = [0.35, 0.50, 0.62, 0.72, 0.85, 1.00, 1.25];
    /// Seated cable row, wide grip
    pub const SEATED_ROW_WIDE: [f64; 7] = [0.30, 0.45, 0.55, 0.65, 0.78, 0.92, 1.15];
}

/// Isolation lifts: adjusted working weight (lbs) at standard anchors
pub mod isolation {
    /// Dumbbell lateral raise
    pub const LATERAL_RAISE: [f64; 7] = [5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0];
    /// Bicep curl
    pub const BICEP_CURL: [f64; 7] = [15.0, 25.0, 35.0, 45.0, 55.0, 65.0, 85.0];
    /// Tricep extension
    pub const TRICEP_EXTENSION: [f64; 7] = [15.0, 25.0, 35.0, 45.0, 55.0, 70.0, 90.0];
    /// Machine leg extension
    pub const LEG_EXTENSION: [f64; 7] = [40.0, 70.0, 95.0, 120.0, 150.0, 180.0, 240.0];
    /// Machine leg curl
    pub const LEG_CURL: [f64; 7] = [30.0, 50.0, 70.0, 90.0, 110.0, 135.0, 180.0];
}

/// Conditioning and general strength
pub mod conditioning {
    /// 5K finishing time in minutes, men (lower is better)
    pub const RUN_5K_MALE: [f64; 7] = [16.0, 18.0, 20.0, 22.0, 25.0, 30.0, 40.0];
    /// 5K finishing time in minutes, women (lower is better)
    pub const RUN_5K_FEMALE: [f64; 7] = [19.0, 21.0, 24.0, 27.0, 30.0, 35.0, 45.0];
    /// Lift/bodyweight ratio, evenly spaced anchors
    pub const STRENGTH_RATIO: [f64; 8] = [0.0, 0.3, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0];
    /// Nightly sleep hours off the 7-9 hour plateau, evenly spaced anchors
    pub const SLEEP_HOURS: [f64; 8] = [3.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0];
}

/// Emotional and mental-health scales, evenly spaced anchors
pub mod emotional {
    /// Perceived stress management score (0-100)
    pub const STRESS_MANAGEMENT: [f64; 9] = [0.0, 30.0, 45.0, 55.0, 65.0, 75.0, 85.0, 95.0, 100.0];
    /// Resilience score (0-100)
    pub const RESILIENCE: [f64; 8] = [0.0, 40.0, 55.0, 65.0, 75.0, 85.0, 92.0, 100.0];
    /// Daily meditation minutes
    pub const MEDITATION: [f64; 8] = [0.0, 5.0, 10.0, 15.0, 20.0, 30.0, 45.0, 60.0];
    /// Sleep quality score (0-100)
    pub const SLEEP_QUALITY: [f64; 8] = [0.0, 40.0, 55.0, 65.0, 75.0, 85.0, 92.0, 100.0];
    /// Life satisfaction (0-10)
    pub const LIFE_SATISFACTION: [f64; 8] = [0.0, 3.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    /// Positive affect score (0-100)
    pub const POSITIVE_AFFECT: [f64; 8] = [0.0, 30.0, 45.0, 55.0, 65.0, 75.0, 85.0, 100.0];
    /// Gratitude entries per week
    pub const GRATITUDE: [f64; 8] = [0.0, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 14.0];
    /// Self-awareness score (0-100)
    pub const SELF_AWARENESS: [f64; 9] = [0.0, 30.0, 45.0, 55.0, 65.0, 75.0, 85.0, 95.0, 100.0];
    /// Emotional regulation score (0-100)
    pub const EMOTIONAL_REGULATION: [f64; 8] = [0.0, 35.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
    /// Therapy sessions attended (lifetime)
    pub const THERAPY_SESSIONS: [f64; 8] = [0.0, 1.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0];
    /// Work-life balance score (0-100)
    pub const WORK_LIFE_BALANCE: [f64; 9] = [0.0, 30.0, 45.0, 55.0, 65.0, 75.0, 85.0, 95.0, 100.0];
    /// Social support score (0-100)
    pub const SOCIAL_SUPPORT: [f64; 8] = [0.0, 35.0, 50.0, 62.0, 72.0, 82.0, 92.0, 100.0];
    /// Mindfulness scale score (39-195)
    pub const MINDFULNESS: [f64; 8] = [39.0, 80.0, 100.0, 120.0, 140.0, 160.0, 180.0, 195.0];
    /// Distinct emotion words used
    pub const EMOTIONAL_VOCABULARY: [f64; 8] = [10.0, 20.0, 30.0, 40.0, 50.0, 70.0, 100.0, 150.0];
    /// Optimism score (0-100)
    pub const OPTIMISM: [f64; 9] = [0.0, 30.0, 45.0, 55.0, 65.0, 75.0, 85.0, 95.0, 100.0];
    /// Anxiety screening score (0-21, lower is better)
    pub const ANXIETY: [f64; 8] = [0.0, 1.0, 3.0, 5.0, 7.0, 10.0, 15.0, 21.0];
    /// Depression screening score (0-27, lower is better)
    pub const DEPRESSION: [f64; 8] = [0.0, 3.0, 5.0, 7.0, 10.0, 15.0, 20.0, 27.0];
    /// Burnout score (0-100, lower is better)
    pub const BURNOUT: [f64; 9] = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 65.0, 80.0, 100.0];
}

/// Social metrics at standard anchors
pub mod social {
    /// Sociability score (0-100)
    pub const SOCIABILITY: [f64; 7] = [0.0, 30.0, 50.0, 70.0, 85.0, 95.0, 100.0];
}

/// Normally distributed scores
pub mod normal_scores {
    /// Population mean shared by IQ-style scales
    pub const MEAN: f64 = 100.0;
    /// Population standard deviation shared by IQ-style scales
    pub const STD_DEV: f64 = 15.0;
}
