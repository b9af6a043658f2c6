use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use catalog_core::Bounds;
use catalog_products::ProductRecord;
use catalog_query::{Column, Evaluator, FilterCriteria, PageState, SortSpec, paginate, sort_indices};
use chrono::{Duration, TimeZone, Utc};

const CATEGORIES: [&str; 4] = ["Electronics", "Home", "Garden", "Toys"];
const WORDS: [&str; 8] = ["Wireless", "Desk", "Lamp", "Mouse", "Chair", "Cable", "Kettle", "Drone"];

fn synthetic_catalog(n: usize) -> Vec<ProductRecord> {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let name = format!("{} {} {}", WORDS[i % 8], WORDS[(i / 8) % 8], i);
            let price = (i % 7 != 0).then_some((i % 200) as f64 + 0.99);
            ProductRecord::new(
                i as i64,
                name,
                CATEGORIES[i % 4],
                format!("Sub {}", i % 12),
                start + Duration::hours(i as i64),
            )
            .with_price(price)
        })
        .collect()
}

fn bench_field_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_filters");
    for size in [1_000usize, 10_000, 50_000] {
        let records = synthetic_catalog(size);
        let criteria = FilterCriteria::default()
            .with_categories(["Electronics", "Home"])
            .with_price_range(Bounds::new(10.0, 120.0).unwrap());
        let evaluator = Evaluator::new();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(evaluator.evaluate(records, &criteria)));
        });
    }
    group.finish();
}

fn bench_fuzzy_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy_name");
    for size in [1_000usize, 10_000] {
        let records = synthetic_catalog(size);
        let criteria = FilterCriteria::default().with_name("keetle");
        let evaluator = Evaluator::new();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(evaluator.evaluate(records, &criteria)));
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let records = synthetic_catalog(10_000);
    let criteria = FilterCriteria::default().with_price_range(Bounds::new(0.0, 100.0).unwrap());
    let evaluator = Evaluator::new();
    let state = PageState::new(3, 25).unwrap();

    c.bench_function("evaluate_sort_paginate_10k", |b| {
        b.iter(|| {
            let mut kept = evaluator.evaluate(&records, &criteria);
            sort_indices(&records, &mut kept, SortSpec::descending(Column::Price));
            let page = paginate(&kept, state);
            black_box(page.items().len())
        });
    });
}

criterion_group!(benches, bench_field_filters, bench_fuzzy_name, bench_full_pipeline);
criterion_main!(benches);
