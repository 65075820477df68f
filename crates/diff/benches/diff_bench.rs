//! Benchmarks for flat and sectioned staged diffing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uneaten_diff::{flat, sectioned, Diffable, DiffableSection};

#[derive(Debug, Clone)]
struct Row {
    id: u64,
    text: String,
}

impl Diffable for Row {
    type Id = u64;

    fn identity(&self) -> Self::Id {
        self.id
    }

    fn content_equals(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

#[derive(Debug, Clone)]
struct Group {
    id: u64,
    title: String,
    rows: Vec<Row>,
}

impl Diffable for Group {
    type Id = u64;

    fn identity(&self) -> Self::Id {
        self.id
    }

    fn content_equals(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl DiffableSection for Group {
    type Item = Row;

    fn items(&self) -> &[Row] {
        &self.rows
    }

    fn with_items(&self, items: Vec<Row>) -> Self {
        Self {
            rows: items,
            ..self.clone()
        }
    }

    // Header-only reload so the benchmark exercises item-level matching.
    fn needs_reload(&self, next: &Self) -> bool {
        !self.content_equals(next)
    }
}

fn rows(count: u64) -> Vec<Row> {
    (0..count)
        .map(|id| Row {
            id,
            text: format!("row {id}"),
        })
        .collect()
}

/// Shuffle some rows, rename some, drop a few, add a few.
fn perturb(rows: &[Row], rng: &mut ChaCha8Rng) -> Vec<Row> {
    let mut next: Vec<Row> = rows
        .iter()
        .filter(|_| rng.gen_bool(0.95))
        .cloned()
        .map(|mut row| {
            if rng.gen_bool(0.1) {
                row.text.push('!');
            }
            row
        })
        .collect();
    let _ = next.partial_shuffle(rng, rows.len() / 10);
    for i in 0..rows.len() as u64 / 20 {
        next.push(Row {
            id: 1_000_000 + i,
            text: format!("new {i}"),
        });
    }
    next
}

fn bench_flat(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let source = rows(1000);
    let target = perturb(&source, &mut rng);

    c.bench_function("flat_diff_1000", |b| {
        b.iter(|| flat::diff(black_box(&source), black_box(&target)).unwrap())
    });
}

fn bench_sectioned(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let source: Vec<Group> = (0..20)
        .map(|id| Group {
            id,
            title: format!("group {id}"),
            rows: rows(50),
        })
        .collect();
    let target: Vec<Group> = source
        .iter()
        .map(|group| Group {
            rows: perturb(&group.rows, &mut rng),
            ..group.clone()
        })
        .collect();

    c.bench_function("sectioned_diff_20x50", |b| {
        b.iter(|| sectioned::diff(black_box(&source), black_box(&target)).unwrap())
    });
}

criterion_group!(benches, bench_flat, bench_sectioned);
criterion_main!(benches);
