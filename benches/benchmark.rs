// Performance benchmarks for collation and ranking
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use facetx_core::{Collator, FilterableProperties, Product};
use facetx_ranking::{FacetScorer, ItemRanker, RankerConfig, SelectionState};
use rand::prelude::*;

const CATEGORIES: &[&str] = &["furniture", "lighting", "decor", "textiles", "storage"];
const COLORS: &[&str] = &["red", "blue", "green", "brown", "black", "white", "gold"];
const MATERIALS: &[&str] = &["oak", "steel", "brass", "velvet", "cotton", "glass"];
const STYLES: &[&str] = &["modern", "rustic", "industrial", "scandinavian"];

fn pick(options: &[&str], rng: &mut impl Rng) -> String {
    options[rng.random_range(0..options.len())].to_string()
}

fn generate_product(id: usize, rng: &mut impl Rng) -> Product {
    Product::new(id as u64, format!("Product {}", id)).with_properties(
        FilterableProperties::new()
            .with_category(pick(CATEGORIES, rng))
            .with_colors([pick(COLORS, rng), pick(COLORS, rng)])
            .with_materials([pick(MATERIALS, rng)])
            .with_styles([pick(STYLES, rng)])
            .with_rating(rng.random_range(1.0..5.0))
            .with_price(rng.random_range(10.0..2000.0)),
    )
}

fn generate_catalog(size: usize) -> Vec<Product> {
    let mut rng = rand::rng();
    (0..size).map(|i| generate_product(i, &mut rng)).collect()
}

fn benchmark_collate(c: &mut Criterion) {
    let mut group = c.benchmark_group("collate");

    for size in [100, 1_000, 10_000].iter() {
        let products = generate_catalog(*size);
        let collator = Collator::default();

        group.bench_with_input(BenchmarkId::new("facetx", size), size, |b, _| {
            b.iter(|| black_box(collator.collate(&products)));
        });
    }

    group.finish();
}

fn benchmark_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [100, 1_000, 10_000].iter() {
        let products = generate_catalog(*size);
        let collator = Collator::default();
        let bought_hist = collator.collate(products.iter().take(10));
        let liked_hist = collator.collate(products.iter().skip(10).take(25));
        let selection: SelectionState = ["red", "oak"].into_iter().collect();
        let ranker = ItemRanker::new(RankerConfig::default(), collator);

        group.bench_with_input(BenchmarkId::new("facetx", size), size, |b, _| {
            b.iter(|| black_box(ranker.rank(&products, &bought_hist, &liked_hist, &selection)));
        });
    }

    group.finish();
}

fn benchmark_facet_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("facet_scores");

    let products = generate_catalog(10_000);
    let collator = Collator::default();
    let catalog_hist = collator.collate(&products);
    let bought_hist = collator.collate(products.iter().take(10));
    let liked_hist = collator.collate(products.iter().skip(10).take(25));
    let scorer = FacetScorer::default();

    group.bench_function("facetx", |b| {
        b.iter(|| black_box(scorer.score(&catalog_hist, &bought_hist, &liked_hist)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_collate,
    benchmark_rank,
    benchmark_facet_scores
);
criterion_main!(benches);
