use chrono::NaiveTime;

use crate::models::event::Event;
use crate::models::time_slot::TimeSlot;
use crate::services::layout::SlotGeometry;

/// Identifies the event a drag gesture carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub event_id: i64,
}

impl DragPayload {
    pub fn new(event_id: i64) -> Self {
        Self { event_id }
    }
}

/// Where a dragged event was released.
///
/// `slot` is `None` when the element under the pointer is not a time-slot
/// row (header, panel, outside the window).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropTarget {
    pub slot: Option<TimeSlot>,
    /// Pointer offset from the top edge of the target row
    pub offset_in_slot: f32,
}

impl DropTarget {
    pub fn on_slot(slot: TimeSlot, offset_in_slot: f32) -> Self {
        Self {
            slot: Some(slot),
            offset_in_slot,
        }
    }

    pub fn outside() -> Self {
        Self {
            slot: None,
            offset_in_slot: 0.0,
        }
    }
}

/// New `(start, end)` for `event` dropped onto `target`.
///
/// The start snaps to the slot nearest the drop point; the end snaps to
/// the slot nearest the drop point plus the event's original height, so
/// the duration is kept whenever it fits before the end of the day.
pub fn resolve_drop(
    event: &Event,
    target: &DropTarget,
    geometry: &SlotGeometry,
    slots: &[TimeSlot],
) -> Option<(NaiveTime, NaiveTime)> {
    let slot = target.slot?;
    let offset = geometry.slot_top(slot.index) + target.offset_in_slot;
    let height = geometry.duration_pixels(event.start, event.end);

    let start = geometry.nearest_slot(offset, slots)?.time;
    let end = geometry.nearest_slot(offset + height, slots)?.time;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time_slot::{generate_time_slots, parse_hhmm, Granularity};
    use test_case::test_case;

    fn project_work() -> Event {
        Event::new(
            3,
            "Project Work",
            parse_hhmm("14:30").unwrap(),
            parse_hhmm("16:00").unwrap(),
        )
        .unwrap()
    }

    #[test_case(16, 0.0, "08:00", "09:30" ; "row top")]
    #[test_case(16, 14.0, "08:00", "09:30" ; "just under half a row")]
    #[test_case(16, 15.0, "08:30", "10:00" ; "half a row snaps down")]
    #[test_case(0, -40.0, "00:00", "01:00" ; "above the grid clamps to midnight")]
    #[test_case(46, 0.0, "23:00", "23:30" ; "late drop is truncated at the last slot")]
    fn test_resolve_drop(row: usize, offset: f32, start: &str, end: &str) {
        let geometry = SlotGeometry::new(Granularity::Half, 30.0);
        let slots = generate_time_slots(Granularity::Half);
        let target = DropTarget::on_slot(slots[row], offset);

        let (new_start, new_end) =
            resolve_drop(&project_work(), &target, &geometry, &slots).unwrap();

        assert_eq!(new_start, parse_hhmm(start).unwrap());
        assert_eq!(new_end, parse_hhmm(end).unwrap());
    }

    #[test]
    fn test_outside_target_resolves_to_nothing() {
        let geometry = SlotGeometry::new(Granularity::Half, 30.0);
        let slots = generate_time_slots(Granularity::Half);
        assert!(resolve_drop(&project_work(), &DropTarget::outside(), &geometry, &slots).is_none());
    }
}
