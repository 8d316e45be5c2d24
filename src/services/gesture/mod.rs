//! Per-event gesture state for moving and resizing events.
//!
//! Each event is either idle, being dragged, or being resized. The two
//! active states carry the pointer's vertical position at gesture start.
//! A gesture on one event never blocks a gesture on another; a second
//! gesture on the same event is refused until the first one finishes or
//! is cancelled.

use std::collections::HashMap;

use chrono::NaiveTime;

use crate::models::event::Event;
use crate::models::time_slot::TimeSlot;
use crate::services::layout::SlotGeometry;

pub mod drag;
pub mod resize;

pub use drag::{resolve_drop, DragPayload, DropTarget};
pub use resize::resolve_resize;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        origin_y: f32,
    },
    Resizing {
        origin_y: f32,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, GestureState::Resizing { .. })
    }

    pub fn origin_y(&self) -> Option<f32> {
        match *self {
            GestureState::Idle => None,
            GestureState::Dragging { origin_y } | GestureState::Resizing { origin_y } => {
                Some(origin_y)
            }
        }
    }
}

/// New times produced by a finished gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reschedule {
    pub event_id: i64,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Gesture state for every event of one view; absent entries are idle.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    states: HashMap<i64, GestureState>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, event_id: i64) -> GestureState {
        self.states.get(&event_id).copied().unwrap_or_default()
    }

    /// First event with a gesture in progress
    pub fn active(&self) -> Option<(i64, GestureState)> {
        self.states
            .iter()
            .find(|(_, state)| !state.is_idle())
            .map(|(id, state)| (*id, *state))
    }

    /// Start moving an event. Returns `false` if it already has a gesture.
    pub fn begin_drag(&mut self, payload: DragPayload, origin_y: f32) -> bool {
        self.begin(payload.event_id, GestureState::Dragging { origin_y })
    }

    /// Start resizing an event. Returns `false` if it already has a gesture.
    pub fn begin_resize(&mut self, event_id: i64, origin_y: f32) -> bool {
        self.begin(event_id, GestureState::Resizing { origin_y })
    }

    fn begin(&mut self, event_id: i64, next: GestureState) -> bool {
        let current = self.state(event_id);
        if !current.is_idle() {
            log::debug!(
                "Ignoring {:?} for event {}: already {:?}",
                next,
                event_id,
                current
            );
            return false;
        }

        log::debug!("Event {} -> {:?}", event_id, next);
        self.states.insert(event_id, next);
        true
    }

    /// End a drag on `event`, dropping it onto `target`.
    ///
    /// The event returns to idle whether or not the drop lands on a slot.
    /// Returns `None` when the event was not being dragged or the target
    /// carries no slot; in both cases the event keeps its times.
    pub fn finish_drag(
        &mut self,
        event: &Event,
        target: &DropTarget,
        geometry: &SlotGeometry,
        slots: &[TimeSlot],
    ) -> Option<Reschedule> {
        if !self.state(event.id).is_dragging() {
            return None;
        }
        self.states.remove(&event.id);

        match resolve_drop(event, target, geometry, slots) {
            Some((start, end)) => Some(Reschedule {
                event_id: event.id,
                start,
                end,
            }),
            None => {
                log::debug!("Event {} dropped outside the grid; unchanged", event.id);
                None
            }
        }
    }

    /// End a resize on `event` with the pointer released at `release_y`.
    ///
    /// Only the end time changes. Returns `None` when the event was not
    /// being resized.
    pub fn finish_resize(
        &mut self,
        event: &Event,
        release_y: f32,
        geometry: &SlotGeometry,
        slots: &[TimeSlot],
    ) -> Option<Reschedule> {
        let GestureState::Resizing { origin_y } = self.state(event.id) else {
            return None;
        };
        self.states.remove(&event.id);

        let end = resolve_resize(event, origin_y, release_y, geometry, slots)?;
        Some(Reschedule {
            event_id: event.id,
            start: event.start,
            end,
        })
    }

    /// Abandon any gesture on `event_id`, returning what was in progress
    pub fn cancel(&mut self, event_id: i64) -> GestureState {
        self.states.remove(&event_id).unwrap_or_default()
    }

    /// Abandon every gesture, returning how many were in progress
    pub fn cancel_all(&mut self) -> usize {
        let active = self.states.values().filter(|state| !state.is_idle()).count();
        if active > 0 {
            log::debug!("Cancelling {} unfinished gestures", active);
        }
        self.states.clear();
        active
    }
}
