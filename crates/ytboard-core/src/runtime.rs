//! Async entry points: one-time dataset load and the coordinator task
//!
//! The coordinator is owned by a single task; UI messages arrive over an mpsc
//! channel and are handled in dispatch order, so no locking is involved.

use crate::config::DashboardConfig;
use crate::coordinator::{FilterMessage, InteractionCoordinator};
use crate::error::LoadError;
use crate::event::{DashboardEvent, EventBus};
use crate::loader::DatasetLoader;
use std::path::Path;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{error, info, warn};

/// Load the dataset and build a coordinator.
///
/// A load failure is logged and published as `LoadFailed`; the dashboard is
/// then left unpopulated (`None`).
pub async fn open_dashboard(
    path: &Path,
    config: DashboardConfig,
    bus: &EventBus,
) -> Option<InteractionCoordinator> {
    info!(path = %path.display(), "Loading dataset");

    match DatasetLoader::new().load(path).await {
        Ok(loaded) => {
            let report = loaded.report;
            for problem in report.warnings().take(5) {
                warn!(origin = %problem.source, detail = %problem.message, "Dataset load warning");
            }
            bus.publish(DashboardEvent::DatasetLoaded {
                rows: report.rows_loaded,
                mismatched: report.mismatch_count(),
            });
            Some(InteractionCoordinator::new(loaded.dataset, config))
        }
        Err(e) => {
            let problem = LoadError::from_core_error("dataset", &e);
            error!(
                error = %e,
                suggestion = problem.suggestion.as_deref().unwrap_or(""),
                "Dataset load failed, dashboard left unpopulated"
            );
            bus.publish(DashboardEvent::LoadFailed(problem.message));
            None
        }
    }
}

/// Drive the coordinator until the message channel closes.
///
/// Publishes the initial render, then every recompute. The throttle's trailing
/// recompute fires at its deadline; on shutdown any owed recompute is flushed.
/// Returns the coordinator so its final state can be inspected.
pub async fn run_coordinator(
    mut coordinator: InteractionCoordinator,
    mut messages: mpsc::Receiver<FilterMessage>,
    bus: EventBus,
) -> InteractionCoordinator {
    bus.publish_updates(coordinator.initial_render());

    loop {
        let deadline = coordinator.next_deadline();

        tokio::select! {
            biased;

            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                bus.publish_updates(coordinator.on_deadline(Instant::now()));
            }
            message = messages.recv() => {
                match message {
                    Some(message) => {
                        let updates = coordinator.handle(message, Instant::now());
                        bus.publish_updates(updates);
                    }
                    None => {
                        bus.publish_updates(coordinator.flush());
                        info!("Message channel closed, coordinator stopping");
                        break;
                    }
                }
            }
        }
    }

    coordinator
}
