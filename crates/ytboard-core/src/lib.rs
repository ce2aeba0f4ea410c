//! ytboard-core - Core library for ytboard
//!
//! Loads the trending-videos dataset, holds the shared filter state and
//! recomputes the aggregations behind every dashboard panel when a filter
//! changes. Rendering is left to whoever consumes the panel views.

pub mod analytics;
pub mod config;
pub mod coordinator;
pub mod dataset;
pub mod error;
pub mod event;
pub mod filter;
pub mod loader;
pub mod runtime;
pub mod scale;
pub mod throttle;

pub use config::{DashboardConfig, PanelPolicies};
pub use coordinator::{FilterMessage, InteractionCoordinator};
pub use dataset::Dataset;
pub use error::{CoreError, LoadReport};
pub use event::{DashboardEvent, EventBus};
pub use filter::{FilterState, SelectionChange};
pub use loader::{DatasetLoader, LoadedDataset};
pub use runtime::{open_dashboard, run_coordinator};
pub use scale::SliderScale;
pub use throttle::Throttle;
