// Event module
// A single timed entry on the day grid

use chrono::{Duration, NaiveTime};
use thiserror::Error;

use crate::models::time_slot::{format_hhmm, parse_hhmm, TimeParseError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time {end} must be after start time {start}")]
    EndNotAfterStart { start: String, end: String },
    #[error("Color must be in hex format (#RRGGBB or #RGB), got '{0}'")]
    InvalidColor(String),
    #[error(transparent)]
    InvalidTime(#[from] TimeParseError),
}

/// Timed event shown on the day grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub color: Option<String>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within the owning collection
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Start time of day
    /// * `end` - End time of day, strictly after `start`
    ///
    /// # Examples
    /// ```
    /// use rust_dayview::models::event::Event;
    /// use chrono::NaiveTime;
    ///
    /// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// let end = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    /// let event = Event::new(1, "Team Meeting", start, end).unwrap();
    /// assert_eq!(event.duration_minutes(), 60);
    /// ```
    pub fn new(
        id: i64,
        title: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, EventError> {
        let event = Self {
            id,
            title: title.into(),
            start,
            end,
            color: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Attach a display color (hex format)
    pub fn with_color(mut self, color: impl Into<String>) -> Result<Self, EventError> {
        self.color = Some(color.into());
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }

        check_time_range(self.start, self.end)?;

        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err(EventError::InvalidColor(color.clone()));
            }
        }

        Ok(())
    }

    /// Signed duration; zero or negative if a gesture collapsed the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Half-open overlap test used to decide which rows render this event
    pub fn occupies(&self, slot_time: NaiveTime) -> bool {
        self.start <= slot_time && slot_time < self.end
    }

    pub fn time_range_label(&self) -> String {
        format!("{} - {}", format_hhmm(self.start), format_hhmm(self.end))
    }
}

/// Ensure `end` comes strictly after `start`
pub fn check_time_range(start: NaiveTime, end: NaiveTime) -> Result<(), EventError> {
    if end <= start {
        return Err(EventError::EndNotAfterStart {
            start: format_hhmm(start),
            end: format_hhmm(end),
        });
    }
    Ok(())
}

/// Event under construction in the add-event panel, before an id exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    /// Build a draft from raw text inputs
    pub fn from_inputs(title: &str, start: &str, end: &str) -> Result<Self, EventError> {
        let draft = Self::new(title.trim(), parse_hhmm(start)?, parse_hhmm(end)?);
        draft.validate()?;
        Ok(draft)
    }

    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }
        check_time_range(self.start, self.end)
    }

    pub fn into_event(self, id: i64) -> Result<Event, EventError> {
        Event::new(id, self.title, self.start, self.end)
    }
}

const SAMPLE_EVENTS: [(i64, &str, &str, &str, &str); 3] = [
    (1, "Meeting with team", "09:00", "10:00", "#5B8DEF"),
    (2, "Lunch Break", "12:00", "12:30", "#4CAF8C"),
    (3, "Project Work", "14:30", "16:00", "#E0884A"),
];

/// The fixed events a view starts with
pub fn sample_events() -> Vec<Event> {
    SAMPLE_EVENTS
        .iter()
        .filter_map(|&(id, title, start, end, color)| {
            let start = parse_hhmm(start).ok()?;
            let end = parse_hhmm(end).ok()?;
            Event::new(id, title, start, end).ok()?.with_color(color).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_new_event_success() {
        let event = Event::new(7, "Meeting", at(9, 0), at(10, 0)).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.title, "Meeting");
        assert!(event.color.is_none());
    }

    #[test]
    fn test_new_event_empty_title() {
        let result = Event::new(1, "   ", at(9, 0), at(10, 0));
        assert_eq!(result.unwrap_err(), EventError::EmptyTitle);
    }

    #[test]
    fn test_new_event_invalid_times() {
        let result = Event::new(1, "Meeting", at(10, 0), at(9, 0));
        assert!(matches!(
            result,
            Err(EventError::EndNotAfterStart { .. })
        ));
    }

    #[test]
    fn test_new_event_equal_times() {
        assert!(Event::new(1, "Meeting", at(9, 0), at(9, 0)).is_err());
    }

    #[test]
    fn test_invalid_color() {
        let result = Event::new(1, "Meeting", at(9, 0), at(10, 0))
            .unwrap()
            .with_color("red");
        assert_eq!(
            result.unwrap_err(),
            EventError::InvalidColor("red".to_string())
        );
    }

    #[test]
    fn test_short_color() {
        let event = Event::new(1, "Meeting", at(9, 0), at(10, 0))
            .unwrap()
            .with_color("#F57")
            .unwrap();
        assert_eq!(event.color.as_deref(), Some("#F57"));
    }

    #[test]
    fn test_occupies_is_end_exclusive() {
        let event = Event::new(1, "Meeting", at(9, 0), at(10, 0)).unwrap();
        assert!(event.occupies(at(9, 0)));
        assert!(event.occupies(at(9, 30)));
        assert!(!event.occupies(at(10, 0)));
        assert!(!event.occupies(at(8, 30)));
    }

    #[test]
    fn test_duration_and_label() {
        let event = Event::new(3, "Project Work", at(14, 30), at(16, 0)).unwrap();
        assert_eq!(event.duration_minutes(), 90);
        assert_eq!(event.time_range_label(), "14:30 - 16:00");
    }

    #[test]
    fn test_draft_from_inputs() {
        let draft = EventDraft::from_inputs(" Standup ", "08:15", "08:30").unwrap();
        assert_eq!(draft.title, "Standup");
        assert_eq!(draft.start, at(8, 15));

        let event = draft.into_event(4).unwrap();
        assert_eq!(event.id, 4);
    }

    #[test]
    fn test_draft_rejects_bad_time() {
        let result = EventDraft::from_inputs("Standup", "8h", "08:30");
        assert!(matches!(result, Err(EventError::InvalidTime(_))));
    }

    #[test]
    fn test_draft_rejects_empty_title() {
        let result = EventDraft::from_inputs("", "08:00", "08:30");
        assert_eq!(result.unwrap_err(), EventError::EmptyTitle);
    }

    #[test]
    fn test_sample_events() {
        let events = sample_events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].title, "Lunch Break");
        assert_eq!(events[1].start, at(12, 0));
        assert_eq!(events[1].end, at(12, 30));
        assert!(events.iter().all(|e| e.validate().is_ok()));
    }
}
