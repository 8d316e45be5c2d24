use chrono::NaiveTime;

use crate::models::event::Event;
use crate::models::time_slot::TimeSlot;
use crate::services::layout::SlotGeometry;

/// New end time for `event` after its bottom handle moved from
/// `origin_y` to `release_y`.
///
/// The net pointer displacement is added to the event's current height
/// and the resulting bottom edge snaps to the nearest slot. No minimum
/// duration is applied here; callers decide whether a collapsed event is
/// acceptable.
pub fn resolve_resize(
    event: &Event,
    origin_y: f32,
    release_y: f32,
    geometry: &SlotGeometry,
    slots: &[TimeSlot],
) -> Option<NaiveTime> {
    let displacement = release_y - origin_y;
    let bottom = geometry.offset_for_time(event.start)
        + geometry.duration_pixels(event.start, event.end)
        + displacement;

    geometry.nearest_slot(bottom, slots).map(|slot| slot.time)
}
