use super::EventService;
use crate::models::event::Event;
use crate::models::time_slot::{Granularity, TimeSlot};
use chrono::NaiveTime;

impl EventService {
    /// Every event, in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    /// Events to render in the row starting at `slot_time`.
    ///
    /// Uses half-open semantics: an event occupies the row when
    /// `start <= slot_time < end`, so a row starting exactly at an
    /// event's end is free. Linear scan; the collection is small.
    pub fn events_in_slot(&self, slot_time: NaiveTime) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.occupies(slot_time))
            .collect()
    }

    /// Events whose start time falls inside `slot`.
    ///
    /// These are the rows where an event's title block is drawn; the other
    /// rows it occupies only show a continuation bar.
    pub fn starting_in_slot(&self, slot: &TimeSlot, granularity: Granularity) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| slot.contains(event.start, granularity))
            .collect()
    }
}
