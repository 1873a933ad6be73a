//! Session event types for SynesthesiaComposer
//!
//! Provides the session event definitions and the EventBus a front-end can
//! subscribe to (status sidebar, library writer, composition stage).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::InputKind;

/// Session lifecycle events
///
/// Events are broadcast via EventBus and serialize with a `type` tag so a
/// front-end can forward them as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A new sensory input replaced the current one
    InputSaved {
        /// ID of the saved record
        input_id: Uuid,
        /// Kind of input that was saved
        kind: InputKind,
        /// When the input was saved
        timestamp: DateTime<Utc>,
    },

    /// The current input slot was emptied by the user
    InputCleared {
        /// When the slot was cleared
        timestamp: DateTime<Utc>,
    },

    /// The current input was snapshotted into the composition history
    CompositionRecorded {
        /// ID of the snapshotted record
        input_id: Uuid,
        /// History length after recording
        composition_count: usize,
        /// When the snapshot was taken
        timestamp: DateTime<Utc>,
    },

    /// Current input and history were both discarded
    SessionReset {
        /// When the session was reset
        timestamp: DateTime<Utc>,
    },
}

impl SessionEvent {
    /// Event name, matching the serialized `type` tag
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::InputSaved { .. } => "InputSaved",
            SessionEvent::InputCleared { .. } => "InputCleared",
            SessionEvent::CompositionRecorded { .. } => "CompositionRecorded",
            SessionEvent::SessionReset { .. } => "SessionReset",
        }
    }

    /// When the event happened
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            SessionEvent::InputSaved { timestamp, .. }
            | SessionEvent::InputCleared { timestamp }
            | SessionEvent::CompositionRecorded { timestamp, .. }
            | SessionEvent::SessionReset { timestamp } => *timestamp,
        }
    }
}

/// Broadcast channel for session events
///
/// Sending never blocks and needs no async runtime; slow subscribers lose
/// the oldest events once `capacity` is exceeded.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<SessionEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus with specified channel capacity
    ///
    /// # Examples
    ///
    /// ```
    /// use syncomp_common::events::EventBus;
    ///
    /// let event_bus = EventBus::new(16);
    /// assert_eq!(event_bus.capacity(), 16);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    ///
    /// Events emitted before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Returns `Ok(subscriber_count)` if at least one subscriber exists,
    /// `Err` if nobody is listening.
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: SessionEvent,
    ) -> Result<usize, broadcast::error::SendError<SessionEvent>> {
        self.tx.send(event)
    }

    /// Emit an event, ignoring if no subscribers are listening
    pub fn emit_lossy(&self, event: SessionEvent) {
        let _ = self.tx.send(event);
    }

    /// Get the current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Get the configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = SessionEvent::InputSaved {
            input_id: Uuid::nil(),
            kind: InputKind::Color,
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "InputSaved");
        assert_eq!(json["kind"], "color");
        assert_eq!(json["type"], event.event_type());
    }

    #[test]
    fn test_event_round_trips() {
        let event = SessionEvent::CompositionRecorded {
            input_id: Uuid::new_v4(),
            composition_count: 3,
            timestamp: Utc::now(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_emit_without_subscribers_errors() {
        let bus = EventBus::new(4);
        let result = bus.emit(SessionEvent::InputCleared {
            timestamp: Utc::now(),
        });
        assert!(result.is_err());

        // Lossy emit must not panic either
        bus.emit_lossy(SessionEvent::InputCleared {
            timestamp: Utc::now(),
        });
    }

    #[test]
    fn test_subscriber_receives_events_in_order() {
        let bus = EventBus::new(4);
        let mut rx = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        let first = SessionEvent::InputCleared {
            timestamp: Utc::now(),
        };
        let second = SessionEvent::SessionReset {
            timestamp: Utc::now(),
        };
        assert_eq!(bus.emit(first.clone()).unwrap(), 1);
        bus.emit_lossy(second.clone());

        assert_eq!(rx.try_recv().unwrap(), first);
        assert_eq!(rx.try_recv().unwrap(), second);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_timestamp_accessor() {
        let timestamp = Utc::now();
        let event = SessionEvent::SessionReset { timestamp };
        assert_eq!(event.timestamp(), timestamp);
    }
}
