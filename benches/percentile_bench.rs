// ABOUTME: Criterion benchmarks for percentile lookups and distribution synthesis
// ABOUTME: Measures registry dispatch, inverse lookups, net worth inversion and curve building
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors

//! Criterion benchmarks for the percentile engine.
//!
//! Lookups sit on the dashboard render path, so they run once per visible
//! metric per render; distribution curves run once per history fetch.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use ascend::config::AppConfig;
use ascend::services::PercentileService;
use ascend_core::models::{Gender, UserProfile};
use ascend_intelligence::config::intelligence::{DistributionConfig, WealthConfig};
use ascend_intelligence::distribution::build_distribution;
use ascend_intelligence::percentile::{AgeGroup, MetricArgs, NetWorthModel};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// History sizes matching the default query limit and a long history
const HISTORY_SIZES: [usize; 3] = [10, 100, 1000];

fn service() -> PercentileService {
    PercentileService::from_config(&AppConfig::default()).unwrap()
}

#[allow(clippy::cast_precision_loss)]
fn synthetic_history(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| ((i * 37) % 100) as f64 + (i % 7) as f64 / 10.0)
        .collect()
}

fn bench_forward_lookup(c: &mut Criterion) {
    let service = service();
    let profile = UserProfile::new()
        .with_age(34)
        .with_gender(Gender::Female)
        .with_bodyweight(150.0);

    let mut group = c.benchmark_group("forward_lookup");
    for (name, value) in [
        ("bench_press_percentile", 135.0),
        ("run_5k_percentile", 27.5),
        ("networth_percentile", 240_000.0),
        ("sleep_hours_percentile", 7.5),
        ("anxiety_percentile", 6.0),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| service.compute_percentile(black_box(name), black_box(value), &profile));
        });
    }
    group.finish();
}

fn bench_inverse_lookup(c: &mut Criterion) {
    let registry = service().registry().clone();
    let args = MetricArgs::new(0.0).with_age(34).with_bodyweight(150.0);

    let mut group = c.benchmark_group("inverse_lookup");
    group.throughput(Throughput::Elements(registry.len() as u64));
    group.bench_function("all_metrics_p75", |b| {
        b.iter(|| {
            for metric in registry.metrics() {
                black_box(registry.value_at_percentile(metric.name, black_box(75.0), &args));
            }
        });
    });
    group.finish();
}

fn bench_networth_inversion(c: &mut Criterion) {
    let model = NetWorthModel::new(&WealthConfig::default());

    c.bench_function("networth_value_at_p99", |b| {
        b.iter(|| model.value_at(black_box(99.0), AgeGroup::Thirties));
    });
}

fn bench_distribution(c: &mut Criterion) {
    let config = DistributionConfig::default();

    let mut group = c.benchmark_group("distribution");
    for size in HISTORY_SIZES {
        let samples = synthetic_history(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("build", size), &samples, |b, samples| {
            b.iter(|| build_distribution(black_box(samples), &config));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_forward_lookup,
    bench_inverse_lookup,
    bench_networth_inversion,
    bench_distribution
);
criterion_main!(benches);
