use super::DayViewApp;
use crate::services::swipe::SwipeDirection;
use chrono::{Local, NaiveDate};

impl DayViewApp {
    pub(super) fn navigate_previous(&mut self) {
        self.current_date = shift_days(self.current_date, -1);
    }

    pub(super) fn navigate_next(&mut self) {
        self.current_date = shift_days(self.current_date, 1);
    }

    pub(super) fn jump_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
    }

    pub(super) fn navigate_swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Next => self.navigate_next(),
            SwipeDirection::Previous => self.navigate_previous(),
        }
    }
}

/// Move `date` by `days`, staying put at the ends of the calendar
fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(chrono::Duration::days(days))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_days_crosses_month() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            shift_days(date, 1),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            shift_days(date, -1),
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_shift_days_saturates() {
        assert_eq!(shift_days(NaiveDate::MAX, 1), NaiveDate::MAX);
    }
}
