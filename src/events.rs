// Event system for pushing orchestrator state to UI subscribers
// Implements event bus pattern using tokio broadcast channels

use crate::app::LoadState;
use crate::model::Page;
use thiserror::Error;
use tokio::sync::broadcast;

/// Maximum capacity for the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Main event structure containing all information about an event
#[derive(Debug, Clone)]
pub struct Event {
    pub source: String,
    pub kind: EventKind,
    pub timestamp: chrono::DateTime<chrono::Local>,
}

impl Event {
    /// Create a new event
    pub fn new(source: impl Into<String>, kind: EventKind) -> Self {
        Self {
            source: source.into(),
            kind,
            timestamp: chrono::Local::now(),
        }
    }
}

/// Types of events that can be sent through the event bus
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Load cycle moved to a new state
    LoadStateChanged(LoadState),

    /// Displayed pet list replaced or extended
    PetsUpdated { count: usize },

    /// A new listing was created and prepended
    ListingAdded { pet_id: u64, name: String },

    /// Navigation moved to another page
    PageChanged(Page),

    /// Modal visibility changed
    ModalChanged(Modal),

    /// A message the user should see (alert/banner)
    UserNotice(String),
}

/// Modals the shell can show over the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Search { open: bool },
    Sell { open: bool },
    Menu { open: bool },
    PetProfile { pet_id: Option<u64> },
}

/// Event bus for publishing and subscribing to events
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with default capacity
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Create a new event bus with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to events - returns a receiver
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: Event) -> Result<usize, EventError> {
        self.tx.send(event).map_err(|_| EventError::SendFailed)
    }

    /// Publish, treating "nobody is listening" as fine
    pub fn emit(&self, source: &str, kind: EventKind) {
        if self.publish(Event::new(source, kind)).is_err() {
            tracing::trace!("No subscribers for event from {}", source);
        }
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Publishing failed because nobody is subscribed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Failed to send event: no active subscribers")]
    SendFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let event = Event::new("app", EventKind::PageChanged(Page::About));

        assert_eq!(event.source, "app");
        assert!(matches!(event.kind, EventKind::PageChanged(Page::About)));
    }

    #[test]
    fn test_event_bus_subscription() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);

        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::with_capacity(4);
        let result = bus.publish(Event::new("app", EventKind::PetsUpdated { count: 1 }));
        assert_eq!(result.unwrap_err(), EventError::SendFailed);

        // emit swallows the same condition
        bus.emit("app", EventKind::PetsUpdated { count: 1 });
    }

    #[test]
    fn test_event_bus_multiple_subscribers() {
        let bus = EventBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.emit("app", EventKind::UserNotice("hello".to_string()));

        // Both subscribers should receive the event
        assert_eq!(
            rx1.try_recv().unwrap().kind,
            EventKind::UserNotice("hello".to_string())
        );
        assert!(rx2.try_recv().is_ok());
    }
}
