// ABOUTME: Metric models binding a benchmark curve or parametric law to its normalization
// ABOUTME: Evaluates percentile and inverse value for every registered metric family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

use super::args::{CohortArgs, LiftArgs, MetricArgs, ProfileDefaults, RaceArgs};
use super::benchmark::BenchmarkCurve;
use super::clamp_percentile;
use super::normal::{inverse_standard_normal, normal_cdf};
use super::normalization::{
    denormalize_compound, denormalize_isolation, denormalize_race_time, normalize_compound,
    normalize_isolation, normalize_race_time,
};
use super::wealth::{AgeGroup, IncomeModel, NetWorthModel};
use crate::config::intelligence::NormalizationConfig;
use ascend_core::constants::percentile::{EPSILON, MAX};
use ascend_core::models::Gender;

/// Whether higher raw values rank higher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Larger raw value, higher percentile
    HigherIsBetter,
    /// Smaller raw value, higher percentile (table stays ascending)
    LowerIsBetter,
}

/// Nightly sleep hours on the healthy plateau score between 90 and 99
const SLEEP_PLATEAU_LOW: f64 = 7.0;
const SLEEP_PLATEAU_HIGH: f64 = 9.0;
const SLEEP_OPTIMUM: f64 = 8.0;
const SLEEP_PLATEAU_BASE: f64 = 90.0;
const SLEEP_PLATEAU_SPAN: f64 = 9.0;
/// Off-plateau percentiles are scaled below the plateau floor
const SLEEP_OFF_PLATEAU_SCALE: f64 = 0.8;

/// How a registered metric turns a raw value into a percentile
#[derive(Debug, Clone, PartialEq)]
pub enum MetricModel {
    /// Log-space lift/bodyweight ratio table with bodyweight and age adjustment
    CompoundLift(BenchmarkCurve),
    /// Linear working-weight table with bodyweight and age adjustment
    IsolationLift(BenchmarkCurve),
    /// Unadjusted lift/bodyweight ratio table
    StrengthRatio(BenchmarkCurve),
    /// Sex-specific race time tables with age adjustment, lower is better
    RaceTime {
        /// Men's table
        male: BenchmarkCurve,
        /// Women's table
        female: BenchmarkCurve,
    },
    /// Plain score table
    Score {
        /// Benchmark table
        curve: BenchmarkCurve,
        /// Ranking direction
        direction: Direction,
    },
    /// Sleep hours: plateau at 7-9 hours, table lookup elsewhere
    SleepHours(BenchmarkCurve),
    /// Normally distributed score
    Normal {
        /// Population mean
        mean: f64,
        /// Population standard deviation
        std_dev: f64,
    },
    /// Spliced log-normal/Pareto net worth by age cohort
    NetWorth,
    /// Breakpoint income table with linear tail
    Income,
}

/// Shared state every model evaluates against
#[derive(Debug, Clone)]
pub struct ModelContext {
    /// Normalization settings
    pub normalization: NormalizationConfig,
    /// Net worth model
    pub net_worth: NetWorthModel,
    /// Income model
    pub income: IncomeModel,
    /// Defaults for missing profile fields
    pub defaults: ProfileDefaults,
}

impl MetricModel {
    /// Percentile in `[0, 100]` for the given arguments
    #[must_use]
    pub fn percentile(&self, args: &MetricArgs, ctx: &ModelContext) -> f64 {
        let raw = match self {
            Self::CompoundLift(curve) => {
                let lift = LiftArgs::resolve(args, &ctx.defaults);
                let adjusted = normalize_compound(
                    lift.weight_lbs,
                    lift.bodyweight_lbs,
                    lift.age,
                    &ctx.normalization,
                );
                curve.percentile_at(adjusted)
            }
            Self::IsolationLift(curve) => {
                let lift = LiftArgs::resolve(args, &ctx.defaults);
                let adjusted = normalize_isolation(
                    lift.weight_lbs,
                    lift.bodyweight_lbs,
                    lift.age,
                    &ctx.normalization,
                );
                curve.percentile_at(adjusted)
            }
            Self::StrengthRatio(curve) => {
                let lift = LiftArgs::resolve(args, &ctx.defaults);
                curve.percentile_at(lift.weight_lbs / lift.bodyweight_lbs)
            }
            Self::RaceTime { male, female } => {
                let race = RaceArgs::resolve(args, &ctx.defaults);
                let curve = match race.gender {
                    Gender::Male => male,
                    Gender::Female => female,
                };
                let adjusted = normalize_race_time(race.minutes, race.age, &ctx.normalization);
                MAX - curve.percentile_at(adjusted)
            }
            Self::Score { curve, direction } => match direction {
                Direction::HigherIsBetter => curve.percentile_at(args.value),
                Direction::LowerIsBetter => MAX - curve.percentile_at(args.value),
            },
            Self::SleepHours(curve) => sleep_hours_percentile(args.value, curve),
            Self::Normal { mean, std_dev } => normal_cdf(args.value, *mean, *std_dev) * MAX,
            Self::NetWorth => {
                let cohort = CohortArgs::resolve(args, &ctx.defaults);
                ctx.net_worth
                    .percentile_of(cohort.value, AgeGroup::from_age(cohort.age))
            }
            Self::Income => ctx.income.percentile_of(args.value),
        };
        clamp_percentile(raw)
    }

    /// Raw value at `percentile` for the given profile arguments
    ///
    /// `args.value` is ignored. Weight-valued results are in `args.unit`.
    #[must_use]
    pub fn value_at(&self, percentile: f64, args: &MetricArgs, ctx: &ModelContext) -> f64 {
        let percentile = clamp_percentile(percentile);
        match self {
            Self::CompoundLift(curve) => {
                let lift = LiftArgs::resolve(args, &ctx.defaults);
                let pounds = denormalize_compound(
                    curve.value_at(percentile),
                    lift.bodyweight_lbs,
                    lift.age,
                    &ctx.normalization,
                );
                lift.unit.from_pounds(pounds)
            }
            Self::IsolationLift(curve) => {
                let lift = LiftArgs::resolve(args, &ctx.defaults);
                let pounds = denormalize_isolation(
                    curve.value_at(percentile),
                    lift.bodyweight_lbs,
                    lift.age,
                    &ctx.normalization,
                );
                lift.unit.from_pounds(pounds)
            }
            Self::StrengthRatio(curve) => {
                let lift = LiftArgs::resolve(args, &ctx.defaults);
                lift.unit
                    .from_pounds(curve.value_at(percentile) * lift.bodyweight_lbs)
            }
            Self::RaceTime { male, female } => {
                let race = RaceArgs::resolve(args, &ctx.defaults);
                let curve = match race.gender {
                    Gender::Male => male,
                    Gender::Female => female,
                };
                denormalize_race_time(
                    curve.value_at(MAX - percentile),
                    race.age,
                    &ctx.normalization,
                )
            }
            Self::Score { curve, direction } => match direction {
                Direction::HigherIsBetter => curve.value_at(percentile),
                Direction::LowerIsBetter => curve.value_at(MAX - percentile),
            },
            Self::SleepHours(curve) => sleep_hours_at(percentile, curve),
            Self::Normal { mean, std_dev } => {
                std_dev.mul_add(inverse_standard_normal(percentile / MAX, EPSILON), *mean)
            }
            Self::NetWorth => {
                let cohort = CohortArgs::resolve(args, &ctx.defaults);
                ctx.net_worth
                    .value_at(percentile, AgeGroup::from_age(cohort.age))
            }
            Self::Income => ctx.income.value_at(percentile),
        }
    }
}

fn sleep_hours_percentile(hours: f64, curve: &BenchmarkCurve) -> f64 {
    if (SLEEP_PLATEAU_LOW..=SLEEP_PLATEAU_HIGH).contains(&hours) {
        let distance = (hours - SLEEP_OPTIMUM).abs();
        SLEEP_PLATEAU_SPAN.mul_add(1.0 - distance, SLEEP_PLATEAU_BASE)
    } else {
        curve.percentile_at(hours) * SLEEP_OFF_PLATEAU_SCALE
    }
}

/// Shortest sleep reaching `percentile`; never recommends oversleeping
fn sleep_hours_at(percentile: f64, curve: &BenchmarkCurve) -> f64 {
    let plateau_top = SLEEP_PLATEAU_BASE + SLEEP_PLATEAU_SPAN;
    if percentile >= SLEEP_PLATEAU_BASE {
        let capped = percentile.min(plateau_top);
        return SLEEP_PLATEAU_LOW + (capped - SLEEP_PLATEAU_BASE) / SLEEP_PLATEAU_SPAN;
    }
    curve
        .value_at(percentile / SLEEP_OFF_PLATEAU_SCALE)
        .min(SLEEP_PLATEAU_LOW)
}
