//! Read-only panel views handed to the rendering layer
//!
//! A view is everything a renderer needs to draw one panel: the aggregation
//! output plus per-element `selected` / `dimmed` flags. Dimmed elements stay in
//! the view so their layout position is retained.

use serde::Serialize;

use crate::analytics::{
    CategorySummary, CategoryTimeline, ChannelRanking, HeatmapMetric, LeaderboardMetric,
    TagFrequency, TimeGranularity, TrendMetricCell,
};
use crate::models::Panel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleNode {
    #[serde(flatten)]
    pub summary: CategorySummary,
    pub selected: bool,
    pub dimmed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleChartView {
    pub nodes: Vec<BubbleNode>,
    /// Largest video count, used to rescale bubble radii
    pub max_video_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesView {
    #[serde(flatten)]
    pub timeline: CategoryTimeline,
    pub dimmed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeGraphView {
    /// `None` when no row has a valid trending date
    pub granularity: Option<TimeGranularity>,
    pub series: Vec<TimeSeriesView>,
    /// Y axis upper bound across every series
    pub max_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCellView {
    #[serde(flatten)]
    pub cell: TrendMetricCell,
    /// Value of the currently selected metric
    pub value: f64,
    pub dimmed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapView {
    pub metric: HeatmapMetric,
    /// Y axis: every category of the full dataset
    pub categories: Vec<String>,
    /// X axis: `1..=max trend duration`
    pub durations: Vec<u32>,
    pub cells: Vec<HeatmapCellView>,
    /// `[0, max]` over selected categories; `None` means no finite value
    pub color_domain: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub metric: LeaderboardMetric,
    /// Tooltip unit word
    pub label: String,
    pub entries: Vec<ChannelRanking>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloudView {
    pub tags: Vec<TagFrequency>,
}

/// A freshly recomputed panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", content = "view", rename_all = "snake_case")]
pub enum PanelUpdate {
    BubbleChart(BubbleChartView),
    TimeGraph(TimeGraphView),
    Heatmap(HeatmapView),
    Leaderboard(LeaderboardView),
    WordCloud(WordCloudView),
}

impl PanelUpdate {
    pub fn panel(&self) -> Panel {
        match self {
            PanelUpdate::BubbleChart(_) => Panel::BubbleChart,
            PanelUpdate::TimeGraph(_) => Panel::TimeGraph,
            PanelUpdate::Heatmap(_) => Panel::Heatmap,
            PanelUpdate::Leaderboard(_) => Panel::Leaderboard,
            PanelUpdate::WordCloud(_) => Panel::WordCloud,
        }
    }
}
