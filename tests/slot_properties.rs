// Property-based tests for slot generation and pixel mapping

use proptest::prelude::*;
use rust_dayview::models::time_slot::{
    generate_time_slots, minutes_since_midnight, parse_hhmm, Granularity,
};
use rust_dayview::services::layout::SlotGeometry;

fn granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![Just(Granularity::Quarter), Just(Granularity::Half)]
}

proptest! {
    /// Property: a full day of slots, strictly increasing, zero-padded labels
    #[test]
    fn prop_slots_cover_the_day(granularity in granularity()) {
        let slots = generate_time_slots(granularity);
        prop_assert_eq!(slots.len(), (24 * 60 / granularity.minutes()) as usize);

        for pair in slots.windows(2) {
            prop_assert!(minutes_since_midnight(pair[0].time) < minutes_since_midnight(pair[1].time));
        }

        for slot in &slots {
            let label = slot.label();
            prop_assert_eq!(label.len(), 5);
            prop_assert_eq!(&label[2..3], ":");
            prop_assert!(label[..2].chars().all(|c| c.is_ascii_digit()));
            prop_assert!(label[3..].chars().all(|c| c.is_ascii_digit()));
            prop_assert_eq!(parse_hhmm(&label).unwrap(), slot.time);
        }
    }

    /// Property: nearest slot index stays in range for any offset
    #[test]
    fn prop_nearest_slot_in_range(
        granularity in granularity(),
        slot_height in 1.0f32..200.0,
        offset in proptest::num::f32::ANY,
    ) {
        let geometry = SlotGeometry::new(granularity, slot_height);
        let count = granularity.slots_per_day();
        prop_assert!(geometry.nearest_slot_index(offset, count) < count);
    }

    /// Property: nearest slot index never decreases as the offset grows
    #[test]
    fn prop_nearest_slot_monotone(
        granularity in granularity(),
        slot_height in 1.0f32..200.0,
        a in -10_000.0f32..100_000.0,
        b in -10_000.0f32..100_000.0,
    ) {
        let geometry = SlotGeometry::new(granularity, slot_height);
        let count = granularity.slots_per_day();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(geometry.nearest_slot_index(low, count) <= geometry.nearest_slot_index(high, count));
    }

    /// Property: duration pixels scale linearly with the minute difference
    #[test]
    fn prop_duration_pixels_linear(start in 0u32..1440, length in 0u32..600) {
        let geometry = SlotGeometry::new(Granularity::Half, 30.0);
        let end_minutes = (start + length).min(1439);
        let start_time = chrono::NaiveTime::from_hms_opt(start / 60, start % 60, 0).unwrap();
        let end_time = chrono::NaiveTime::from_hms_opt(end_minutes / 60, end_minutes % 60, 0).unwrap();

        let expected = (end_minutes as f32 - start as f32) / 30.0 * 30.0;
        prop_assert!((geometry.duration_pixels(start_time, end_time) - expected).abs() < 1e-3);
    }
}

#[test]
fn test_one_hour_is_sixty_pixels() {
    let geometry = SlotGeometry::new(Granularity::Half, 30.0);
    let start = parse_hhmm("09:00").unwrap();
    let end = parse_hhmm("10:00").unwrap();

    assert_eq!(geometry.duration_pixels(start, end), 60.0);
    assert_eq!(geometry.duration_pixels(start, start), 0.0);
}
