//! Performance benchmarks for the aggregation functions
//!
//! Every filter change re-runs these over the filtered rows, so a full
//! recompute has to stay well under one throttle window (40ms).

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tokio::time::Instant;
use ytboard_core::analytics::{
    category_timelines, compute_trend_metrics, rank_channels, summarize_categories,
    tag_frequencies,
};
use ytboard_core::{DashboardConfig, Dataset, FilterMessage, InteractionCoordinator};
use ytboard_types::{LeaderboardMetric, VideoRecord};

const CATEGORIES: [&str; 8] = [
    "Music",
    "Gaming",
    "Comedy",
    "Entertainment",
    "News & Politics",
    "Sports",
    "Education",
    "Film & Animation",
];

/// Generate trending rows spread over `days` days
fn generate_test_records(count: usize, days: usize) -> Vec<VideoRecord> {
    let first = NaiveDate::from_ymd_opt(2017, 11, 14).unwrap();
    (0..count)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            let views = 1_000 + (i as u64 * 37) % 500_000;
            VideoRecord {
                category: category.to_string(),
                category_id: (i % CATEGORIES.len()) as u64,
                channel_title: format!("channel-{}", i % 200),
                comment_count: views / 200,
                dislikes: views / 150,
                likes: views / 25,
                trending_date: Some(first + Duration::days((i % days) as i64)),
                tags: vec![category.to_lowercase(), format!("tag-{}", i % 50)],
                title: format!("video-{}", i),
                views,
                trend_duration: 1 + (i % 14) as u32,
                ..VideoRecord::default()
            }
        })
        .collect()
}

/// Benchmark 1: bubble chart summaries with varying row counts
fn categories_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_categories");

    for count in [1_000, 10_000, 40_000] {
        let records = generate_test_records(count, 200);
        group.bench_with_input(BenchmarkId::new("rows", count), &records, |b, records| {
            b.iter(|| {
                black_box(summarize_categories(records.iter()));
            });
        });
    }

    group.finish();
}

/// Benchmark 2: heatmap cells (category x trend duration)
fn heatmap_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_trend_metrics");

    for count in [1_000, 10_000, 40_000] {
        let records = generate_test_records(count, 200);
        group.bench_with_input(BenchmarkId::new("rows", count), &records, |b, records| {
            b.iter(|| {
                black_box(compute_trend_metrics(records.iter()));
            });
        });
    }

    group.finish();
}

/// Benchmark 3: time graph with each bin granularity
fn timeline_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_timelines");

    for days in [30, 120, 200] {
        let records = generate_test_records(10_000, days);
        group.bench_with_input(BenchmarkId::new("days", days), &records, |b, records| {
            b.iter(|| {
                black_box(category_timelines(records.iter()));
            });
        });
    }

    group.finish();
}

/// Benchmark 4: leaderboard and word cloud
fn ranking_benchmark(c: &mut Criterion) {
    let records = generate_test_records(40_000, 200);

    c.bench_function("rank_channels", |b| {
        b.iter(|| {
            black_box(rank_channels(records.iter(), LeaderboardMetric::Views, 20));
        });
    });

    c.bench_function("tag_frequencies", |b| {
        b.iter(|| {
            black_box(tag_frequencies(records.iter(), 20));
        });
    });
}

/// Benchmark 5: one full slider recompute through the coordinator
fn coordinator_benchmark(c: &mut Criterion) {
    let dataset = Dataset::new(generate_test_records(40_000, 200));
    let config = DashboardConfig {
        throttle_interval_ms: 0,
        ..DashboardConfig::default()
    };
    let mut coordinator = InteractionCoordinator::new(dataset, config);
    let mut end = 1000.0;

    c.bench_function("slider_recompute", |b| {
        b.iter(|| {
            end = if end > 500.0 { end - 1.0 } else { 1000.0 };
            let updates = coordinator.handle(
                FilterMessage::TimeRangeChanged { begin: 0.0, end },
                Instant::now(),
            );
            black_box(updates);
        });
    });
}

criterion_group!(
    benches,
    categories_benchmark,
    heatmap_benchmark,
    timeline_benchmark,
    ranking_benchmark,
    coordinator_benchmark
);
criterion_main!(benches);
