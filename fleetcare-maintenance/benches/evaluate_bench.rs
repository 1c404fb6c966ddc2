use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fleetcare_core::MaintenanceCategory;
use fleetcare_maintenance::evaluate;
use test_fixtures::{make_vehicle, service_point};

fn bench_evaluate(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();

    let fresh = make_vehicle("bench-fresh");

    let mut serviced = make_vehicle("bench-serviced");
    serviced.odometer_km = 55_000;
    for category in MaintenanceCategory::ALL {
        serviced
            .service_history
            .record(category, service_point(now, 3, 48_000));
    }

    c.bench_function("evaluate_fresh_vehicle", |b| {
        b.iter(|| evaluate(black_box(&fresh), now))
    });
    c.bench_function("evaluate_serviced_vehicle", |b| {
        b.iter(|| evaluate(black_box(&serviced), now))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
