//! Pixel geometry of the day grid.
//!
//! Converts between vertical pixel offsets (measured from the top of the
//! first row) and slot indices, and sizes event blocks by duration.

use chrono::NaiveTime;

use crate::models::time_slot::{minutes_since_midnight, Granularity, TimeSlot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    pub granularity: Granularity,
    /// Height of one row in pixels
    pub slot_height: f32,
}

impl SlotGeometry {
    pub fn new(granularity: Granularity, slot_height: f32) -> Self {
        Self {
            granularity,
            slot_height,
        }
    }

    /// Index of the slot nearest to `offset`, clamped into `[0, slot_count - 1]`.
    ///
    /// Rounds `offset / slot_height`, so an offset halfway through a row
    /// snaps to the next row. Negative offsets clamp to 0, and overflowing
    /// offsets clamp to the last slot. A NaN offset maps to slot 0.
    pub fn nearest_slot_index(&self, offset: f32, slot_count: usize) -> usize {
        let Some(last) = slot_count.checked_sub(1) else {
            return 0;
        };

        let raw = (offset / self.slot_height).round();
        if raw.is_nan() || raw <= 0.0 {
            0
        } else if raw >= last as f32 {
            last
        } else {
            raw as usize
        }
    }

    /// Slot nearest to `offset`; `None` only when `slots` is empty
    pub fn nearest_slot<'a>(&self, offset: f32, slots: &'a [TimeSlot]) -> Option<&'a TimeSlot> {
        slots.get(self.nearest_slot_index(offset, slots.len()))
    }

    /// Rendered height of an event spanning `start..end`.
    ///
    /// Zero when the times are equal and negative when `end` precedes `start`.
    pub fn duration_pixels(&self, start: NaiveTime, end: NaiveTime) -> f32 {
        let minutes = minutes_since_midnight(end) - minutes_since_midnight(start);
        minutes as f32 / self.granularity.minutes() as f32 * self.slot_height
    }

    /// Offset of `time` from the top of the grid
    pub fn offset_for_time(&self, time: NaiveTime) -> f32 {
        minutes_since_midnight(time) as f32 / self.granularity.minutes() as f32 * self.slot_height
    }

    /// Offset of the top edge of the row at `index`
    pub fn slot_top(&self, index: usize) -> f32 {
        index as f32 * self.slot_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time_slot::{generate_time_slots, parse_hhmm};

    fn half_hour() -> SlotGeometry {
        SlotGeometry::new(Granularity::Half, 30.0)
    }

    #[test]
    fn test_nearest_slot_rounds() {
        let geometry = half_hour();
        assert_eq!(geometry.nearest_slot_index(0.0, 48), 0);
        assert_eq!(geometry.nearest_slot_index(14.0, 48), 0);
        assert_eq!(geometry.nearest_slot_index(15.0, 48), 1);
        assert_eq!(geometry.nearest_slot_index(44.0, 48), 1);
        assert_eq!(geometry.nearest_slot_index(46.0, 48), 2);
    }

    #[test]
    fn test_nearest_slot_clamps() {
        let geometry = half_hour();
        assert_eq!(geometry.nearest_slot_index(-500.0, 48), 0);
        assert_eq!(geometry.nearest_slot_index(10_000.0, 48), 47);
        assert_eq!(geometry.nearest_slot_index(f32::INFINITY, 48), 47);
        assert_eq!(geometry.nearest_slot_index(f32::NEG_INFINITY, 48), 0);
        assert_eq!(geometry.nearest_slot_index(f32::NAN, 48), 0);
    }

    #[test]
    fn test_nearest_slot_on_empty_grid() {
        let geometry = half_hour();
        assert_eq!(geometry.nearest_slot_index(120.0, 0), 0);
        assert!(geometry.nearest_slot(120.0, &[]).is_none());
    }

    #[test]
    fn test_nearest_slot_label() {
        let geometry = half_hour();
        let slots = generate_time_slots(Granularity::Half);
        let slot = geometry.nearest_slot(26.0 * 30.0, &slots).unwrap();
        assert_eq!(slot.label(), "13:00");
    }

    #[test]
    fn test_duration_pixels() {
        let geometry = half_hour();
        let nine = parse_hhmm("09:00").unwrap();
        let ten = parse_hhmm("10:00").unwrap();
        assert_eq!(geometry.duration_pixels(nine, ten), 60.0);
        assert_eq!(geometry.duration_pixels(nine, nine), 0.0);
        assert_eq!(geometry.duration_pixels(ten, nine), -60.0);
    }

    #[test]
    fn test_duration_pixels_quarter_rows() {
        let geometry = SlotGeometry::new(Granularity::Quarter, 44.0);
        let start = parse_hhmm("09:00").unwrap();
        let end = parse_hhmm("09:45").unwrap();
        assert_eq!(geometry.duration_pixels(start, end), 132.0);
    }

    #[test]
    fn test_offset_for_time() {
        let geometry = half_hour();
        assert_eq!(geometry.offset_for_time(parse_hhmm("12:00").unwrap()), 720.0);
        assert_eq!(geometry.slot_top(24), 720.0);
    }
}
