//! Benchmark for the set-enumeration hot path.
//!
//! `possible_sets` walks C(N, 3) candidate groups; the standard 81-card
//! deck is ~85k candidates, the 5-dimension deck ~2.4M.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use setfinder::deck::DimensionSchema;
use setfinder::engine::DeckEngine;

fn standard_schema(dims: usize) -> DimensionSchema {
    let mut schema = DimensionSchema::new();
    for i in 0..dims {
        schema = schema.with_dimension(format!("d{i}"), ["a", "b", "c"]);
    }
    schema
}

fn bench_possible_sets(c: &mut Criterion) {
    let mut engine = DeckEngine::new();
    engine.generate_deck(standard_schema(4));

    c.bench_function("possible_sets/81_cards", |b| {
        b.iter(|| black_box(engine.possible_sets(3)))
    });
}

fn bench_complete_set(c: &mut Criterion) {
    let mut engine = DeckEngine::new();
    engine.generate_deck(standard_schema(4));
    let cards = engine.cards();

    c.bench_function("complete_set/81_cards", |b| {
        b.iter(|| black_box(engine.complete_set(&[&cards[0], &cards[40]])))
    });
}

criterion_group!(benches, bench_possible_sets, bench_complete_set);
criterion_main!(benches);
