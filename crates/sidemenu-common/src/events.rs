use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Process-wide application lifecycle notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LifecycleEvent {
    EnteredBackground,
    WillEnterForeground,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<LifecycleEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LifecycleEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: LifecycleEvent) -> usize {
        let delivered = self.sender.send(event).unwrap_or(0);
        tracing::trace!(?event, delivered, "lifecycle event published");
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(16)
    }
}
