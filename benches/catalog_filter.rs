use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

use catalog_rs::models::{Catalog, DrinkItem, FoodItem, ItemFilter};
use catalog_rs::repositories::{CatalogRepository, InMemoryCatalogRepository};
use catalog_rs::services::CatalogService;

fn generated_catalog(size: usize) -> Catalog {
    let foods = (0..size)
        .map(|i| FoodItem::new(&i.to_string(), &format!("Dish {}", i), "Main", 50 + i as u32))
        .collect();
    let drinks = (0..size)
        .map(|i| DrinkItem::new(&i.to_string(), &format!("Drink {}", i), 10 + i as u32))
        .collect();
    Catalog::new(foods, drinks)
}

fn bench_seed_queries(c: &mut Criterion) {
    let service = CatalogService::new(Arc::new(InMemoryCatalogRepository::new(Arc::new(
        Catalog::seed(),
    ))));
    let unfiltered = ItemFilter::all();
    let by_id = ItemFilter::by_id("2");

    let mut group = c.benchmark_group("seed_catalog");
    group.bench_function("list_foods_unfiltered", |b| {
        b.iter(|| service.list_foods(black_box(&unfiltered)))
    });
    group.bench_function("list_foods_by_id", |b| {
        b.iter(|| service.list_foods(black_box(&by_id)))
    });
    group.bench_function("list_drinks_by_id", |b| {
        b.iter(|| service.list_drinks(black_box(&by_id)))
    });
    group.finish();
}

fn bench_linear_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_scan");

    for size in [10usize, 100, 1000].iter() {
        let repository = InMemoryCatalogRepository::new(Arc::new(generated_catalog(*size)));
        let last = ItemFilter::by_id((size - 1).to_string());

        group.bench_with_input(BenchmarkId::new("find_foods_last_id", size), size, |b, _| {
            b.iter(|| repository.find_foods(black_box(&last)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_seed_queries, bench_linear_scan);
criterion_main!(benches);
