//! Category x trend-duration metrics for the heatmap

use super::{group_by, sum_of};
use crate::dataset::{Dataset, MAX_TREND_DURATION};
use crate::filter::FilterState;
use ytboard_types::{HeatmapMetric, TrendMetricCell, VideoRecord};

/// Build one cell per (category, trend duration) pair present in `rows`.
///
/// Cells are ordered by category first appearance, then by duration first
/// appearance within the category. The like ratio here is smoothed,
/// `(likes + 0.5) / (likes + dislikes + 1)`, so it is always finite.
pub fn compute_trend_metrics<'a, I>(rows: I) -> Vec<TrendMetricCell>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    let mut cells = Vec::new();

    for (category, by_category) in group_by(rows, |r| r.category.clone()) {
        for (trend_duration, leaves) in group_by(by_category, |r| r.trend_duration) {
            let count = leaves.len();
            let total_views = sum_of(&leaves, |r| r.views);
            let total_likes = sum_of(&leaves, |r| r.likes);
            let total_dislikes = sum_of(&leaves, |r| r.dislikes);

            let (views, likes, dislikes) =
                (total_views as f64, total_likes as f64, total_dislikes as f64);

            cells.push(TrendMetricCell {
                category: category.clone(),
                trend_duration,
                count,
                total_views,
                total_likes,
                total_dislikes,
                avg_views: views / count as f64,
                avg_likes: likes / count as f64,
                avg_dislikes: dislikes / count as f64,
                likes_per_view: likes / views,
                dislikes_per_view: dislikes / views,
                like_ratio: (likes + 0.5) / (likes + dislikes + 1.0),
            });
        }
    }

    cells
}

/// Color scale domain `[0, max]` for `metric`.
///
/// Only cells of selected categories count (all cells when nothing is
/// selected), so the same value can map to different colors depending on the
/// selection. Non-finite values are ignored; `None` when nothing is left.
pub fn color_domain(
    cells: &[TrendMetricCell],
    metric: HeatmapMetric,
    filter: &FilterState,
) -> Option<(f64, f64)> {
    cells
        .iter()
        .filter(|c| filter.passes_category(&c.category))
        .map(|c| metric.value(c))
        .filter(|v| v.is_finite())
        .fold(None, |max: Option<f64>, v| {
            Some(max.map_or(v, |m| m.max(v)))
        })
        .map(|max| (0.0, max))
}

/// Heatmap grid axes, fixed for the lifetime of the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapAxes {
    /// Every category of the full dataset, first appearance order
    pub categories: Vec<String>,
    /// `1..=max trend duration`, never past `MAX_TREND_DURATION`
    pub durations: Vec<u32>,
}

impl HeatmapAxes {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let longest = dataset.max_trend_duration().min(MAX_TREND_DURATION);
        Self {
            categories: dataset.categories(),
            durations: (1..=longest).collect(),
        }
    }
}
