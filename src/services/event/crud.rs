use super::EventService;
use crate::models::event::{check_time_range, Event, EventDraft};
use crate::models::settings::AddEventPolicy;
use anyhow::{Context, Result};
use chrono::NaiveTime;

impl EventService {
    /// Retrieve an event by ID.
    pub fn get(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Next free identifier: one past the largest in use.
    pub fn next_id(&self) -> i64 {
        self.events.iter().map(|event| event.id).max().unwrap_or(0) + 1
    }

    /// Add an event built from `draft`, returning its new ID.
    ///
    /// With [`AddEventPolicy::Replace`] every existing event is discarded
    /// first, leaving the new event as the only entry.
    pub fn add(&mut self, draft: EventDraft, policy: AddEventPolicy) -> Result<i64> {
        let id = self.next_id();
        let event = draft
            .into_event(id)
            .context("Failed to create event from draft")?;

        match policy {
            AddEventPolicy::Append => self.events.push(event),
            AddEventPolicy::Replace => {
                log::debug!("Replacing {} existing events", self.events.len());
                self.events = vec![event];
            }
        }

        log::info!("Added event {} ({:?})", id, policy);
        Ok(id)
    }

    /// Overwrite the start and end of an event, leaving id and title alone.
    ///
    /// Returns `Ok(false)` when no event has `id`. When duration checks are
    /// enabled, a range whose end is not after its start is rejected and
    /// the event keeps its previous times.
    pub fn reschedule(&mut self, id: i64, start: NaiveTime, end: NaiveTime) -> Result<bool> {
        if self.enforce_valid_duration {
            check_time_range(start, end)
                .with_context(|| format!("Refusing to reschedule event {}", id))?;
        }

        let Some(event) = self.events.iter_mut().find(|event| event.id == id) else {
            return Ok(false);
        };

        event.start = start;
        event.end = end;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time_slot::parse_hhmm;
    use pretty_assertions::assert_eq;

    fn at(s: &str) -> NaiveTime {
        parse_hhmm(s).unwrap()
    }

    #[test]
    fn test_get_existing_and_missing() {
        let service = EventService::with_sample_events();
        assert_eq!(service.get(2).unwrap().title, "Lunch Break");
        assert!(service.get(99).is_none());
    }

    #[test]
    fn test_next_id() {
        assert_eq!(EventService::with_sample_events().next_id(), 4);
        assert_eq!(EventService::default().next_id(), 1);
    }

    #[test]
    fn test_add_appends() {
        let mut service = EventService::with_sample_events();
        let draft = EventDraft::new("Review", at("17:00"), at("17:30"));

        let id = service.add(draft, AddEventPolicy::Append).unwrap();

        assert_eq!(id, 4);
        assert_eq!(service.len(), 4);
        assert_eq!(service.get(1).unwrap().title, "Meeting with team");
    }

    #[test]
    fn test_add_replaces_everything() {
        let mut service = EventService::with_sample_events();
        let draft = EventDraft::new("Review", at("17:00"), at("17:30"));

        let id = service.add(draft, AddEventPolicy::Replace).unwrap();

        assert_eq!(service.len(), 1);
        assert_eq!(service.get(id).unwrap().title, "Review");
        assert!(service.get(1).is_none());
    }

    #[test]
    fn test_add_invalid_draft_leaves_state() {
        let mut service = EventService::with_sample_events();
        let draft = EventDraft::new("", at("17:00"), at("17:30"));

        assert!(service.add(draft, AddEventPolicy::Replace).is_err());
        assert_eq!(service.len(), 3);
    }

    #[test]
    fn test_reschedule_preserves_identity() {
        let mut service = EventService::with_sample_events();

        assert!(service.reschedule(2, at("13:00"), at("13:30")).unwrap());

        let event = service.get(2).unwrap();
        assert_eq!(event.id, 2);
        assert_eq!(event.title, "Lunch Break");
        assert_eq!(event.start, at("13:00"));
        assert_eq!(event.end, at("13:30"));
    }

    #[test]
    fn test_reschedule_unknown_id() {
        let mut service = EventService::with_sample_events();
        assert!(!service.reschedule(42, at("13:00"), at("13:30")).unwrap());
    }

    #[test]
    fn test_reschedule_rejects_collapsed_range() {
        let mut service = EventService::with_sample_events();

        assert!(service.reschedule(2, at("13:00"), at("13:00")).is_err());

        let event = service.get(2).unwrap();
        assert_eq!(event.start, at("12:00"));
        assert_eq!(event.end, at("12:30"));
    }

    #[test]
    fn test_reschedule_allows_collapsed_range_when_unchecked() {
        let mut service = EventService::with_sample_events().enforce_valid_duration(false);

        assert!(service.reschedule(2, at("13:00"), at("12:30")).unwrap());
        assert_eq!(service.get(2).unwrap().duration_minutes(), -30);
    }
}
