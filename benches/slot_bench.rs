// Benchmark for slot generation and the per-row overlap filter

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_dayview::models::event::Event;
use rust_dayview::models::time_slot::{generate_time_slots, Granularity};
use rust_dayview::services::event::EventService;

fn bench_generate_slots(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_time_slots");

    for granularity in [Granularity::Quarter, Granularity::Half] {
        group.bench_with_input(
            BenchmarkId::from_parameter(granularity.minutes()),
            &granularity,
            |b, &granularity| b.iter(|| generate_time_slots(black_box(granularity))),
        );
    }

    group.finish();
}

fn events(count: usize) -> Vec<Event> {
    let slots = generate_time_slots(Granularity::Half);
    (0..count)
        .filter_map(|i| {
            let start = slots[i % (slots.len() - 1)];
            let end = start.end_time(Granularity::Half);
            Event::new(i as i64 + 1, format!("Event {}", i + 1), start.time, end).ok()
        })
        .collect()
}

fn bench_overlap_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("events_in_slot_full_day");
    let slots = generate_time_slots(Granularity::Quarter);

    for count in [3, 30, 300] {
        let service = EventService::new(events(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &service, |b, service| {
            b.iter(|| {
                slots
                    .iter()
                    .map(|slot| service.events_in_slot(black_box(slot.time)).len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_slots, bench_overlap_filter);
criterion_main!(benches);
