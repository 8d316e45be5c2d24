//! In-memory event store for a single day view.
//! The collection lives as long as the view that owns it and is never
//! persisted; operations are split across focused submodules.

use crate::models::event::{sample_events, Event};

pub mod crud;
pub mod queries;

/// Owns the events rendered by one day view.
#[derive(Debug, Clone)]
pub struct EventService {
    pub(crate) events: Vec<Event>,
    /// Refuse reschedules that would leave `end <= start`
    pub(crate) enforce_valid_duration: bool,
}

impl Default for EventService {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl EventService {
    /// Create a service over an existing collection
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            enforce_valid_duration: true,
        }
    }

    /// Create a service seeded with the fixed sample events
    pub fn with_sample_events() -> Self {
        Self::new(sample_events())
    }

    pub fn enforce_valid_duration(mut self, enforce: bool) -> Self {
        self.enforce_valid_duration = enforce;
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
