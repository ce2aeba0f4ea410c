//! Aggregation result types
//!
//! Every type here is derived from (dataset, filter state) and recomputed from
//! scratch on each filter change. Ratio fields are plain `f64` and may hold
//! `NaN` or `inf` when a denominator is zero; JSON serialization turns those
//! into `null`, which renderers treat as "no data".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::VideoRecord;

/// Per-category summary behind the bubble chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub video_count: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_dislikes: u64,
    /// Raw `likes / dislikes` (unsmoothed)
    pub like_ratio: f64,
}

/// One heatmap cell keyed by (category, trend duration)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendMetricCell {
    pub category: String,
    pub trend_duration: u32,
    pub count: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_dislikes: u64,
    pub avg_views: f64,
    pub avg_likes: f64,
    pub avg_dislikes: f64,
    pub likes_per_view: f64,
    pub dislikes_per_view: f64,
    /// Smoothed `(likes + 0.5) / (likes + dislikes + 1)`
    pub like_ratio: f64,
}

/// Metric shown by the heatmap color scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapMetric {
    #[default]
    Count,
    TotalViews,
    TotalLikes,
    TotalDislikes,
    AvgViews,
    AvgLikes,
    AvgDislikes,
    LikesPerView,
    DislikesPerView,
    LikeRatio,
}

impl HeatmapMetric {
    /// Dropdown order
    pub const ALL: [HeatmapMetric; 10] = [
        HeatmapMetric::Count,
        HeatmapMetric::TotalViews,
        HeatmapMetric::TotalLikes,
        HeatmapMetric::TotalDislikes,
        HeatmapMetric::AvgViews,
        HeatmapMetric::AvgLikes,
        HeatmapMetric::AvgDislikes,
        HeatmapMetric::LikesPerView,
        HeatmapMetric::DislikesPerView,
        HeatmapMetric::LikeRatio,
    ];

    /// Field name, e.g. `avg_views`
    pub fn key(&self) -> &'static str {
        match self {
            HeatmapMetric::Count => "count",
            HeatmapMetric::TotalViews => "total_views",
            HeatmapMetric::TotalLikes => "total_likes",
            HeatmapMetric::TotalDislikes => "total_dislikes",
            HeatmapMetric::AvgViews => "avg_views",
            HeatmapMetric::AvgLikes => "avg_likes",
            HeatmapMetric::AvgDislikes => "avg_dislikes",
            HeatmapMetric::LikesPerView => "likes_per_view",
            HeatmapMetric::DislikesPerView => "dislikes_per_view",
            HeatmapMetric::LikeRatio => "like_ratio",
        }
    }

    /// Dropdown text (`avg views`)
    pub fn label(&self) -> String {
        self.key().replace('_', " ")
    }

    /// Parse a dropdown value back into a metric
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Read this metric from a cell
    pub fn value(&self, cell: &TrendMetricCell) -> f64 {
        match self {
            HeatmapMetric::Count => cell.count as f64,
            HeatmapMetric::TotalViews => cell.total_views as f64,
            HeatmapMetric::TotalLikes => cell.total_likes as f64,
            HeatmapMetric::TotalDislikes => cell.total_dislikes as f64,
            HeatmapMetric::AvgViews => cell.avg_views,
            HeatmapMetric::AvgLikes => cell.avg_likes,
            HeatmapMetric::AvgDislikes => cell.avg_dislikes,
            HeatmapMetric::LikesPerView => cell.likes_per_view,
            HeatmapMetric::DislikesPerView => cell.dislikes_per_view,
            HeatmapMetric::LikeRatio => cell.like_ratio,
        }
    }
}

/// Metric the channel leaderboard is ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardMetric {
    #[default]
    Views,
    Likes,
    CommentCount,
    Dislikes,
}

impl LeaderboardMetric {
    pub const ALL: [LeaderboardMetric; 4] = [
        LeaderboardMetric::Views,
        LeaderboardMetric::Likes,
        LeaderboardMetric::CommentCount,
        LeaderboardMetric::Dislikes,
    ];

    /// Column name in the dataset
    pub fn key(&self) -> &'static str {
        match self {
            LeaderboardMetric::Views => "views",
            LeaderboardMetric::Likes => "likes",
            LeaderboardMetric::CommentCount => "comment_count",
            LeaderboardMetric::Dislikes => "dislikes",
        }
    }

    /// Unit word for tooltips ("1200 comments")
    pub fn label(&self) -> &'static str {
        match self {
            LeaderboardMetric::CommentCount => "comments",
            other => other.key(),
        }
    }

    /// Dropdown text
    pub fn menu_text(&self) -> String {
        format!("by {}", self.label())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    pub fn value(&self, record: &VideoRecord) -> u64 {
        match self {
            LeaderboardMetric::Views => record.views,
            LeaderboardMetric::Likes => record.likes,
            LeaderboardMetric::CommentCount => record.comment_count,
            LeaderboardMetric::Dislikes => record.dislikes,
        }
    }
}

/// Channel with its summed leaderboard metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRanking {
    pub channel: String,
    pub value: u64,
}

/// Tag with its occurrence count (word cloud input)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFrequency {
    pub tag: String,
    pub count: usize,
}

/// Histogram bin width for the time graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeGranularity {
    Day,
    Week,
    Month,
}

/// Videos trending inside one bin starting at `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBin {
    pub start: NaiveDate,
    pub count: usize,
}

/// One line of the time graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTimeline {
    pub category: String,
    /// Aligned with every other category's bins
    pub bins: Vec<TimeBin>,
}
