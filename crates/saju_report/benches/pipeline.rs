use criterion::{black_box, criterion_group, criterion_main, Criterion};
use saju_calendar::SolarDate;
use saju_report::{analyze, daily, BirthInput};

fn reference_input() -> BirthInput {
    BirthInput {
        name: "테스트".to_owned(),
        year: 1990,
        month: 5,
        day: 15,
        hour: 10,
        minute: 0,
        gender: "남".to_owned(),
        is_lunar: false,
        is_leap_month: false,
    }
}

fn pipeline_bench(c: &mut Criterion) {
    let input = reference_input();
    let today = SolarDate::new(2026, 8, 31);

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("full_analysis", |b| {
        b.iter(|| analyze(black_box(&input), black_box(today)))
    });
    group.bench_function("daily_fortune", |b| {
        b.iter(|| daily(black_box(&input), black_box(today)))
    });
    group.bench_function("serialize_report", |b| {
        let report = analyze(&input, today).unwrap();
        b.iter(|| serde_json::to_string(black_box(&report)))
    });
    group.finish();
}

criterion_group!(benches, pipeline_bench);
criterion_main!(benches);
