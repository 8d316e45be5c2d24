// Time slot module
// Fixed-granularity enumeration of a single day and HH:MM helpers

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Width of one slot in the day grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// 15-minute slots, 96 per day
    Quarter,
    /// 30-minute slots, 48 per day
    Half,
}

impl Granularity {
    pub fn minutes(self) -> u32 {
        match self {
            Granularity::Quarter => 15,
            Granularity::Half => 30,
        }
    }

    pub fn slots_per_day(self) -> usize {
        (MINUTES_PER_DAY / self.minutes()) as usize
    }
}

/// One addressable row of the day grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot {
    pub index: usize,
    pub time: NaiveTime,
}

impl TimeSlot {
    /// Zero-padded `HH:MM` label
    pub fn label(&self) -> String {
        format_hhmm(self.time)
    }

    pub fn is_hour_start(&self) -> bool {
        self.time.minute() == 0
    }

    /// Start of the following slot; the final slot of the day ends at 23:59
    pub fn end_time(&self, granularity: Granularity) -> NaiveTime {
        let step = Duration::minutes(i64::from(granularity.minutes()));
        let (end, wrapped) = self.time.overflowing_add_signed(step);
        if wrapped != 0 {
            NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(self.time)
        } else {
            end
        }
    }

    /// Whether `time` falls inside `[self, self + granularity)`
    pub fn contains(&self, time: NaiveTime, granularity: Granularity) -> bool {
        let slot_start = minutes_since_midnight(self.time);
        let value = minutes_since_midnight(time);
        value >= slot_start && value < slot_start + i64::from(granularity.minutes())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.time.hour(), self.time.minute())
    }
}

/// Enumerate the whole day at the given granularity.
///
/// The sequence is strictly increasing and always starts at `00:00`.
///
/// # Examples
/// ```
/// use rust_dayview::models::time_slot::{generate_time_slots, Granularity};
///
/// let slots = generate_time_slots(Granularity::Half);
/// assert_eq!(slots.len(), 48);
/// assert_eq!(slots[1].label(), "00:30");
/// ```
pub fn generate_time_slots(granularity: Granularity) -> Vec<TimeSlot> {
    let step = granularity.minutes();
    (0..granularity.slots_per_day())
        .filter_map(|index| {
            let minutes = index as u32 * step;
            NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
                .map(|time| TimeSlot { index, time })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("Expected a time in HH:MM format, got '{0}'")]
    Invalid(String),
}

/// Parse a `HH:MM` string such as `"09:30"` or `"9:30"`.
pub fn parse_hhmm(input: &str) -> Result<NaiveTime, TimeParseError> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| TimeParseError::Invalid(trimmed.to_string()))
}

pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight() / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_slots_cover_day() {
        let slots = generate_time_slots(Granularity::Quarter);
        assert_eq!(slots.len(), 96);
        assert_eq!(slots[0].label(), "00:00");
        assert_eq!(slots[1].label(), "00:15");
        assert_eq!(slots[95].label(), "23:45");
    }

    #[test]
    fn test_half_slots_cover_day() {
        let slots = generate_time_slots(Granularity::Half);
        assert_eq!(slots.len(), 48);
        assert_eq!(slots[47].label(), "23:30");
        assert!(slots.iter().enumerate().all(|(i, slot)| slot.index == i));
    }

    #[test]
    fn test_display_matches_label() {
        let slots = generate_time_slots(Granularity::Half);
        assert_eq!(slots[19].to_string(), "09:30");
        assert_eq!(slots[19].to_string(), slots[19].label());
    }

    #[test]
    fn test_hour_start() {
        let slots = generate_time_slots(Granularity::Quarter);
        assert!(slots[4].is_hour_start());
        assert!(!slots[5].is_hour_start());
    }

    #[test]
    fn test_end_time() {
        let slots = generate_time_slots(Granularity::Half);
        assert_eq!(slots[18].end_time(Granularity::Half), parse_hhmm("09:30").unwrap());
        assert_eq!(slots[47].end_time(Granularity::Half), parse_hhmm("23:59").unwrap());
    }

    #[test]
    fn test_slot_contains_is_half_open() {
        let slots = generate_time_slots(Granularity::Half);
        let nine = slots[18];
        assert!(nine.contains(parse_hhmm("09:00").unwrap(), Granularity::Half));
        assert!(nine.contains(parse_hhmm("09:29").unwrap(), Granularity::Half));
        assert!(!nine.contains(parse_hhmm("09:30").unwrap(), Granularity::Half));
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(
            parse_hhmm("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_hhmm(" 14:05 ").unwrap(),
            NaiveTime::from_hms_opt(14, 5, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_hhmm_rejects_garbage() {
        assert!(parse_hhmm("").is_err());
        assert!(parse_hhmm("noon").is_err());
        assert!(parse_hhmm("25:00").is_err());
        assert!(parse_hhmm("12:60").is_err());
        assert_eq!(
            parse_hhmm("abc").unwrap_err(),
            TimeParseError::Invalid("abc".to_string())
        );
    }

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(minutes_since_midnight(parse_hhmm("00:00").unwrap()), 0);
        assert_eq!(minutes_since_midnight(parse_hhmm("14:30").unwrap()), 870);
    }
}
