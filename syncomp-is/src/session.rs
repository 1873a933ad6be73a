//! Interactive session state
//!
//! A session owns the single "current input" slot and the ordered history
//! of recorded compositions. It is created empty, owned by whoever drives
//! the interaction, and never shared between users.
//!
//! Lifecycle:
//! - `save_input` replaces the current input (never merges)
//! - `record_composition` snapshots the current input into the history
//! - `clear_input` empties the slot, `reset` empties both

use crate::record::SensoryInput;
use chrono::Utc;
use syncomp_common::events::{EventBus, SessionEvent};
use syncomp_common::{Error, InputKind, Result};
use tracing::{debug, info};

/// Sidebar summary of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub composition_count: usize,
    /// Kind of the current input, if one is ready
    pub current_kind: Option<InputKind>,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Compositions created: {}", self.composition_count)?;
        match self.current_kind {
            Some(kind) => write!(f, "{} input ready for composition", kind.label()),
            None => write!(f, "No input selected yet"),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    current: Option<SensoryInput>,
    compositions: Vec<SensoryInput>,
    events: Option<EventBus>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that announces lifecycle changes on `bus`
    pub fn with_event_bus(bus: EventBus) -> Self {
        Self {
            events: Some(bus),
            ..Self::default()
        }
    }

    /// Make `input` the current input, replacing any previous one
    pub fn save_input(&mut self, input: SensoryInput) -> &SensoryInput {
        if let Some(previous) = &self.current {
            debug!("Replacing current {} input {}", previous.kind(), previous.id());
        }
        info!("{} input saved ({})", input.kind().label(), input.id());

        self.emit(SessionEvent::InputSaved {
            input_id: input.id(),
            kind: input.kind(),
            timestamp: Utc::now(),
        });
        self.current.insert(input)
    }

    pub fn current(&self) -> Option<&SensoryInput> {
        self.current.as_ref()
    }

    /// Empty the current slot, returning what was there
    pub fn clear_input(&mut self) -> Option<SensoryInput> {
        let cleared = self.current.take();
        if cleared.is_some() {
            info!("Current input cleared");
            self.emit(SessionEvent::InputCleared {
                timestamp: Utc::now(),
            });
        }
        cleared
    }

    /// Append a snapshot of the current input to the composition history
    ///
    /// # Errors
    /// `Error::NotFound` when no input is current.
    pub fn record_composition(&mut self) -> Result<&SensoryInput> {
        let snapshot = self
            .current
            .clone()
            .ok_or_else(|| Error::NotFound("no current input to compose from".to_string()))?;

        self.compositions.push(snapshot);
        let count = self.compositions.len();
        let recorded = &self.compositions[count - 1];

        info!(
            "Composition #{} recorded from {} input",
            count,
            recorded.kind()
        );
        if let Some(bus) = &self.events {
            bus.emit_lossy(SessionEvent::CompositionRecorded {
                input_id: recorded.id(),
                composition_count: count,
                timestamp: Utc::now(),
            });
        }
        Ok(recorded)
    }

    /// Recorded compositions, oldest first
    pub fn compositions(&self) -> &[SensoryInput] {
        &self.compositions
    }

    pub fn composition_count(&self) -> usize {
        self.compositions.len()
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            composition_count: self.compositions.len(),
            current_kind: self.current.as_ref().map(SensoryInput::kind),
        }
    }

    /// Discard the current input and the whole history
    pub fn reset(&mut self) {
        self.current = None;
        self.compositions.clear();
        info!("Session reset");
        self.emit(SessionEvent::SessionReset {
            timestamp: Utc::now(),
        });
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(bus) = &self.events {
            bus.emit_lossy(event);
        }
    }
}
