//! Dashboard configuration
//!
//! Stored as JSON. Loading never fails: a missing, unreadable or invalid file
//! falls back to defaults with a logged warning.

use crate::error::CoreError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};
use ytboard_types::{CategoryPolicy, HeatmapMetric, LeaderboardMetric, Panel};

/// Per-panel category policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelPolicies {
    pub bubble_chart: CategoryPolicy,
    pub time_graph: CategoryPolicy,
    pub heatmap: CategoryPolicy,
    pub leaderboard: CategoryPolicy,
}

impl Default for PanelPolicies {
    fn default() -> Self {
        Self {
            bubble_chart: CategoryPolicy::Dim,
            time_graph: CategoryPolicy::Dim,
            heatmap: CategoryPolicy::Dim,
            leaderboard: CategoryPolicy::Exclude,
        }
    }
}

impl PanelPolicies {
    /// Policy for a panel. The word cloud ignores the selection entirely.
    pub fn policy(&self, panel: Panel) -> CategoryPolicy {
        match panel {
            Panel::BubbleChart => self.bubble_chart,
            Panel::TimeGraph => self.time_graph,
            Panel::Heatmap => self.heatmap,
            Panel::Leaderboard => self.leaderboard,
            Panel::WordCloud => CategoryPolicy::Dim,
        }
    }
}

/// Configuration for the dashboard core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Minimum spacing between slider-driven recomputes (0 disables throttling)
    pub throttle_interval_ms: u64,

    /// Slider positions span `[0, slider_resolution]`
    pub slider_resolution: u32,

    /// Channels kept on the leaderboard
    pub leaderboard_limit: usize,

    /// Tags kept for the word cloud
    pub tag_limit: usize,

    pub panel_policies: PanelPolicies,

    pub initial_leaderboard_metric: LeaderboardMetric,

    pub initial_heatmap_metric: HeatmapMetric,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            throttle_interval_ms: 40, // 25 Hz
            slider_resolution: 1000,
            leaderboard_limit: 20,
            tag_limit: 20,
            panel_policies: PanelPolicies::default(),
            initial_leaderboard_metric: LeaderboardMetric::Views,
            initial_heatmap_metric: HeatmapMetric::Count,
        }
    }
}

impl DashboardConfig {
    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_interval_ms)
    }

    /// Reject values that would make the slider or rankings meaningless
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.slider_resolution == 0 {
            return Err(CoreError::InvalidConfig {
                message: "slider_resolution must be greater than 0".to_string(),
            });
        }
        if self.leaderboard_limit == 0 || self.tag_limit == 0 {
            return Err(CoreError::InvalidConfig {
                message: "leaderboard_limit and tag_limit must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Parse a config file strictly
    pub fn from_file(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CoreError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| CoreError::JsonParse {
            path: path.to_path_buf(),
            message: e.to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, returning defaults on any error
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => {
                debug!(path = %path.display(), "Dashboard config loaded");
                config
            }
            Err(CoreError::FileNotFound { .. }) => {
                debug!(path = %path.display(), "No dashboard config, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid dashboard config, using defaults");
                Self::default()
            }
        }
    }

    /// Persist to `path` as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize dashboard config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write dashboard config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.throttle_interval(), Duration::from_millis(40));
        assert_eq!(config.slider_resolution, 1000);
        assert_eq!(config.leaderboard_limit, 20);
        assert_eq!(
            config.panel_policies.policy(Panel::Heatmap),
            CategoryPolicy::Dim
        );
        assert_eq!(
            config.panel_policies.policy(Panel::Leaderboard),
            CategoryPolicy::Exclude
        );
        // Unselected bubbles stay clickable
        assert_eq!(
            config.panel_policies.policy(Panel::BubbleChart),
            CategoryPolicy::Dim
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("ytboard.json");

        let mut config = DashboardConfig::default();
        config.throttle_interval_ms = 0;
        config.panel_policies.bubble_chart = CategoryPolicy::Exclude;
        config.save(&path).unwrap();

        assert_eq!(DashboardConfig::load(&path), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ytboard.json");
        std::fs::write(&path, r#"{ "tag_limit": 5 }"#).unwrap();

        let config = DashboardConfig::load(&path);
        assert_eq!(config.tag_limit, 5);
        assert_eq!(config.throttle_interval_ms, 40);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ytboard.json");

        std::fs::write(&path, "not json").unwrap();
        assert_eq!(DashboardConfig::load(&path), DashboardConfig::default());

        std::fs::write(&path, r#"{ "slider_resolution": 0 }"#).unwrap();
        assert!(matches!(
            DashboardConfig::from_file(&path),
            Err(CoreError::InvalidConfig { .. })
        ));
        assert_eq!(DashboardConfig::load(&path), DashboardConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = DashboardConfig::load(&dir.path().join("absent.json"));
        assert_eq!(config, DashboardConfig::default());
    }
}
