//! Realtime change notifications.
//!
//! `EventHub` fans events out to every subscribed client over a
//! `tokio::sync::broadcast` channel. Publishing is fire-and-forget: having
//! no subscribers, or a subscriber that lags behind, is never reported back
//! to the publisher.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::ContactEvent;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Port used by services to tell every connected client that data changed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ChangeNotifier: Send + Sync {
    /// Push an event to all connected clients
    async fn notify_all(&self, event: ContactEvent);
}

/// Broadcast hub backing the `/events` stream
pub struct EventHub {
    sender: broadcast::Sender<ContactEvent>,
}

impl EventHub {
    /// Create a hub buffering up to `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Register a new client
    pub fn subscribe(&self) -> broadcast::Receiver<ContactEvent> {
        self.sender.subscribe()
    }

    /// Number of currently connected clients
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[async_trait]
impl ChangeNotifier for EventHub {
    async fn notify_all(&self, event: ContactEvent) {
        match self.sender.send(event) {
            Ok(delivered) => tracing::debug!(event = %event, delivered, "Broadcast event"),
            Err(_) => tracing::debug!(event = %event, "No subscribers for event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_subscriber_receives_the_event() {
        let hub = EventHub::new(8);
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 2);

        hub.notify_all(ContactEvent::Update).await;

        assert_eq!(first.recv().await.unwrap(), ContactEvent::Update);
        assert_eq!(second.recv().await.unwrap(), ContactEvent::Update);
    }

    #[tokio::test]
    async fn notifying_without_subscribers_is_silent() {
        let hub = EventHub::new(8);
        hub.notify_all(ContactEvent::Update).await;
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn zero_capacity_is_clamped() {
        let hub = EventHub::new(0);
        let mut rx = hub.subscribe();
        hub.notify_all(ContactEvent::Update).await;
        assert_eq!(rx.recv().await.unwrap(), ContactEvent::Update);
    }
}
