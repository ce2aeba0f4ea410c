//! Event bus for ytboard using tokio::broadcast
//!
//! The rendering layer subscribes here to receive recomputed panel views.

use std::sync::Arc;
use tokio::sync::broadcast;
use ytboard_types::PanelUpdate;

/// Events emitted by the dashboard core
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// Dataset parsed; the dashboard is populated
    DatasetLoaded { rows: usize, mismatched: usize },
    /// Dataset could not be read; the dashboard stays unpopulated
    LoadFailed(String),
    /// A panel was recomputed
    PanelUpdated(Arc<PanelUpdate>),
}

/// Event bus for broadcasting dashboard events
///
/// Uses tokio::broadcast for multi-consumer support.
pub struct EventBus {
    sender: broadcast::Sender<DashboardEvent>,
}

impl EventBus {
    /// Create a new event bus with specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create with default capacity (256 events)
    pub fn default_capacity() -> Self {
        Self::new(256)
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: DashboardEvent) {
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(event);
    }

    /// Publish every update of one recompute cycle, in order
    pub fn publish_updates(&self, updates: Vec<PanelUpdate>) {
        for update in updates {
            self.publish(DashboardEvent::PanelUpdated(Arc::new(update)));
        }
    }

    /// Subscribe to receive events
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.sender.subscribe()
    }

    /// Get current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::default_capacity()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytboard_types::{Panel, WordCloudView};

    #[tokio::test]
    async fn test_event_bus_publish_subscribe() {
        let bus = EventBus::default_capacity();
        let mut rx = bus.subscribe();

        bus.publish(DashboardEvent::DatasetLoaded {
            rows: 3,
            mismatched: 0,
        });
        bus.publish_updates(vec![PanelUpdate::WordCloud(WordCloudView { tags: vec![] })]);

        let event1 = rx.recv().await.unwrap();
        assert!(matches!(event1, DashboardEvent::DatasetLoaded { rows: 3, .. }));

        let event2 = rx.recv().await.unwrap();
        assert!(
            matches!(event2, DashboardEvent::PanelUpdated(update) if update.panel() == Panel::WordCloud)
        );
    }

    #[tokio::test]
    async fn test_event_bus_multiple_subscribers() {
        let bus = EventBus::default_capacity();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(DashboardEvent::LoadFailed("missing".to_string()));

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();

        assert!(matches!(e1, DashboardEvent::LoadFailed(_)));
        assert!(matches!(e2, DashboardEvent::LoadFailed(_)));
    }

    #[test]
    fn test_event_bus_no_subscribers_ok() {
        let bus = EventBus::default_capacity();
        // Should not panic even with no subscribers
        bus.publish(DashboardEvent::LoadFailed("nobody listening".to_string()));
    }
}
