//! ytboard-types - Shared data types for ytboard
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types.
//!
//! Used by:
//! - ytboard-core (loader, aggregation, coordinator)
//! - any rendering front end consuming panel views as JSON

pub mod analytics;
pub mod models;
pub mod views;

// Re-export analytics types
pub use analytics::{
    CategorySummary, CategoryTimeline, ChannelRanking, HeatmapMetric, LeaderboardMetric,
    TagFrequency, TimeBin, TimeGranularity, TrendMetricCell,
};

// Re-export model types
pub use models::{CategoryPolicy, DateRange, Panel, VideoRecord};

// Re-export panel views
pub use views::{
    BubbleChartView, BubbleNode, HeatmapCellView, HeatmapView, LeaderboardView, PanelUpdate,
    TimeGraphView, TimeSeriesView, WordCloudView,
};
