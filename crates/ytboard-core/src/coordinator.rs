//! Interaction coordinator: UI messages in, recomputed panel views out
//!
//! Owns the single `FilterState`. Every message mutates it through a setter
//! and then recomputes the affected panels from scratch. Slider messages are
//! throttled; category toggles and metric changes recompute immediately.

use crate::analytics::{
    category_timelines, color_domain, compute_trend_metrics, rank_channels, summarize_categories,
    tag_frequencies, HeatmapAxes,
};
use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::filter::FilterState;
use crate::scale::{format_range_label, SliderScale};
use crate::throttle::{Throttle, ThrottleDecision};
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};
use ytboard_types::{
    BubbleChartView, BubbleNode, DateRange, HeatmapCellView, HeatmapMetric, HeatmapView,
    LeaderboardMetric, LeaderboardView, Panel, PanelUpdate, TimeGraphView, TimeSeriesView,
    VideoRecord, WordCloudView,
};

/// Typed UI messages
#[derive(Debug, Clone, PartialEq)]
pub enum FilterMessage {
    /// Range slider moved; handle positions in `[0, slider_resolution]`
    TimeRangeChanged { begin: f64, end: f64 },
    /// Time range set directly
    DateRangeChanged(DateRange),
    /// Bubble chart node clicked
    CategoryToggled(String),
    LeaderboardMetricChanged(LeaderboardMetric),
    HeatmapMetricChanged(HeatmapMetric),
}

/// Panels redrawn after a time-range change
const ON_TIME_CHANGE: [Panel; 4] = Panel::TIME_FILTERED;

/// Panels redrawn after a category toggle
const ON_CATEGORY_TOGGLE: [Panel; 4] = [
    Panel::BubbleChart,
    Panel::Heatmap,
    Panel::TimeGraph,
    Panel::Leaderboard,
];

/// Initial draw order
const ALL_PANELS: [Panel; 5] = [
    Panel::BubbleChart,
    Panel::Heatmap,
    Panel::Leaderboard,
    Panel::TimeGraph,
    Panel::WordCloud,
];

pub struct InteractionCoordinator {
    dataset: Dataset,
    config: DashboardConfig,
    filter: FilterState,
    /// `None` when no record has a valid trending date
    scale: Option<SliderScale>,
    axes: HeatmapAxes,
    leaderboard_metric: LeaderboardMetric,
    heatmap_metric: HeatmapMetric,
    throttle: Throttle,
    /// Computed once over the unfiltered dataset
    word_cloud: WordCloudView,
}

impl InteractionCoordinator {
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        let filter = FilterState::from_dataset(&dataset);
        let scale = filter
            .date_range()
            .map(|extent| SliderScale::new(extent, config.slider_resolution));
        if scale.is_none() {
            warn!("Dataset has no valid trending date; time filter matches nothing");
        }

        let word_cloud = WordCloudView {
            tags: tag_frequencies(dataset.records(), config.tag_limit),
        };

        Self {
            axes: HeatmapAxes::from_dataset(&dataset),
            leaderboard_metric: config.initial_leaderboard_metric,
            heatmap_metric: config.initial_heatmap_metric,
            throttle: Throttle::new(config.throttle_interval()),
            word_cloud,
            scale,
            filter,
            dataset,
            config,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn slider_scale(&self) -> Option<&SliderScale> {
        self.scale.as_ref()
    }

    pub fn leaderboard_metric(&self) -> LeaderboardMetric {
        self.leaderboard_metric
    }

    pub fn heatmap_metric(&self) -> HeatmapMetric {
        self.heatmap_metric
    }

    /// Every panel, for the first draw after load
    pub fn initial_render(&self) -> Vec<PanelUpdate> {
        self.render_all(&ALL_PANELS)
    }

    /// Apply one UI message and return the panels it recomputed
    pub fn handle(&mut self, message: FilterMessage, now: Instant) -> Vec<PanelUpdate> {
        match message {
            FilterMessage::TimeRangeChanged { begin, end } => {
                let Some(scale) = self.scale else {
                    warn!(begin, end, "Slider moved without a time extent, ignoring");
                    return Vec::new();
                };
                self.on_time_change(scale.range(begin, end), now)
            }
            FilterMessage::DateRangeChanged(range) => self.on_time_change(range, now),
            FilterMessage::CategoryToggled(category) => {
                self.filter.toggle_category(&category);
                self.render_all(&ON_CATEGORY_TOGGLE)
            }
            FilterMessage::LeaderboardMetricChanged(metric) => {
                self.leaderboard_metric = metric;
                info!(metric = metric.key(), "Leaderboard metric changed");
                vec![self.render(Panel::Leaderboard)]
            }
            FilterMessage::HeatmapMetricChanged(metric) => {
                self.heatmap_metric = metric;
                info!(metric = metric.key(), "Heatmap metric changed");
                vec![self.render(Panel::Heatmap)]
            }
        }
    }

    fn on_time_change(&mut self, range: DateRange, now: Instant) -> Vec<PanelUpdate> {
        self.filter.set_date_range(range);
        trace!(range = %format_range_label(&range), "Time range changed");

        match self.throttle.on_event(now) {
            ThrottleDecision::RunNow => self.render_all(&ON_TIME_CHANGE),
            ThrottleDecision::Deferred => Vec::new(),
        }
    }

    /// When the throttle window closes, if one is open
    pub fn next_deadline(&self) -> Option<Instant> {
        self.throttle.deadline()
    }

    /// Trailing-edge recompute; empty if nothing was coalesced
    pub fn on_deadline(&mut self, now: Instant) -> Vec<PanelUpdate> {
        if self.throttle.on_deadline(now) {
            debug!("Trailing recompute after throttle window");
            self.render_all(&ON_TIME_CHANGE)
        } else {
            Vec::new()
        }
    }

    /// Settle any owed recompute without waiting for the window
    pub fn flush(&mut self) -> Vec<PanelUpdate> {
        if self.throttle.flush() {
            self.render_all(&ON_TIME_CHANGE)
        } else {
            Vec::new()
        }
    }

    pub fn render_all(&self, panels: &[Panel]) -> Vec<PanelUpdate> {
        panels.iter().map(|panel| self.render(*panel)).collect()
    }

    /// Recompute one panel from (dataset, filter state)
    pub fn render(&self, panel: Panel) -> PanelUpdate {
        let started = std::time::Instant::now();
        let update = match panel {
            Panel::BubbleChart => PanelUpdate::BubbleChart(self.bubble_chart()),
            Panel::TimeGraph => PanelUpdate::TimeGraph(self.time_graph()),
            Panel::Heatmap => PanelUpdate::Heatmap(self.heatmap()),
            Panel::Leaderboard => PanelUpdate::Leaderboard(self.leaderboard()),
            Panel::WordCloud => PanelUpdate::WordCloud(self.word_cloud.clone()),
        };
        debug!(panel = panel.name(), elapsed = ?started.elapsed(), "Panel recomputed");
        update
    }

    fn rows(&self, panel: Panel) -> Vec<&VideoRecord> {
        let policy = self.config.panel_policies.policy(panel);
        self.filter.rows_for(self.dataset.records(), policy)
    }

    pub fn bubble_chart(&self) -> BubbleChartView {
        let nodes: Vec<BubbleNode> = summarize_categories(self.rows(Panel::BubbleChart))
            .into_iter()
            .map(|summary| BubbleNode {
                selected: self.filter.is_selected(&summary.category),
                dimmed: self.filter.is_dimmed(&summary.category),
                summary,
            })
            .collect();
        let max_video_count = nodes
            .iter()
            .map(|n| n.summary.video_count)
            .max()
            .unwrap_or(0);

        BubbleChartView {
            nodes,
            max_video_count,
        }
    }

    pub fn time_graph(&self) -> TimeGraphView {
        let timelines = category_timelines(self.rows(Panel::TimeGraph));
        TimeGraphView {
            granularity: timelines.granularity,
            series: timelines
                .lines
                .into_iter()
                .map(|timeline| TimeSeriesView {
                    dimmed: self.filter.is_dimmed(&timeline.category),
                    timeline,
                })
                .collect(),
            max_count: timelines.max_count,
        }
    }

    pub fn heatmap(&self) -> HeatmapView {
        let metric = self.heatmap_metric;
        let cells = compute_trend_metrics(self.rows(Panel::Heatmap));
        let color_domain = color_domain(&cells, metric, &self.filter);

        HeatmapView {
            metric,
            categories: self.axes.categories.clone(),
            durations: self.axes.durations.clone(),
            cells: cells
                .into_iter()
                .map(|cell| HeatmapCellView {
                    value: metric.value(&cell),
                    dimmed: self.filter.is_dimmed(&cell.category),
                    cell,
                })
                .collect(),
            color_domain,
        }
    }

    pub fn leaderboard(&self) -> LeaderboardView {
        let metric = self.leaderboard_metric;
        LeaderboardView {
            metric,
            label: metric.label().to_string(),
            entries: rank_channels(
                self.rows(Panel::Leaderboard),
                metric,
                self.config.leaderboard_limit,
            ),
        }
    }
}
