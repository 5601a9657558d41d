use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use catalog_core::ItemId;
use catalog_items::{aggregate, list, Item, ListQuery};

const CATEGORIES: [&str; 4] = ["Tools", "Books", "Garden", "Kitchen"];

fn build_catalog(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| {
            Item::new(ItemId::new(i as i64 + 1), format!("Product {i} widget"))
                .with_category(CATEGORIES[i % CATEGORIES.len()])
                .with_price((i % 500) as f64 + 0.99)
        })
        .collect()
}

fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing");

    for size in [1_000usize, 10_000, 100_000] {
        let items = build_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("unfiltered_middle_page", size), &items, |b, items| {
            let query = ListQuery {
                filter_text: String::new(),
                page: size / 20,
                per_page: 10,
            };
            b.iter(|| list(black_box(items), black_box(&query)))
        });

        group.bench_with_input(BenchmarkId::new("filtered_first_page", size), &items, |b, items| {
            let query = ListQuery {
                filter_text: "WIDGET".to_string(),
                page: 1,
                per_page: 50,
            };
            b.iter(|| list(black_box(items), black_box(&query)))
        });
    }

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for size in [1_000usize, 100_000] {
        let items = build_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| aggregate(black_box(items)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_listing, bench_aggregation);
criterion_main!(benches);
