//! Criterion micro-benchmarks for grid editing operations.

use criterion::{criterion_group, criterion_main, Criterion};
use cubestage_bench::{reference_stage, stress_stage};
use cubestage_core::VariantKind;

/// Benchmark: validate() over a 256x256 stage full of stray variants.
fn bench_validate_stress(c: &mut Criterion) {
    let doc = stress_stage(42);

    c.bench_function("validate_stress_256x256", |b| {
        b.iter(|| {
            let mut doc = doc.clone();
            std::hint::black_box(doc.validate());
        });
    });
}

/// Benchmark: Toggle an item on and off at every column of a 32x32 stage.
fn bench_toggle_sweep(c: &mut Criterion) {
    let mut doc = reference_stage(42);
    let (w, l) = (doc.width() as i32, doc.length() as i32);

    c.bench_function("toggle_item_sweep_32x32", |b| {
        b.iter(|| {
            let mut flipped = 0u32;
            for z in 0..l {
                for x in 0..w {
                    if doc.grid.toggle(x, z, VariantKind::Item) {
                        doc.grid.toggle(x, z, VariantKind::Item);
                        flipped += 1;
                    }
                }
            }
            std::hint::black_box(flipped);
        });
    });
}

/// Benchmark: Grow then shrink a 32x32 stage.
fn bench_resize(c: &mut Criterion) {
    let doc = reference_stage(42);

    c.bench_function("resize_32_to_64_and_back", |b| {
        b.iter(|| {
            let mut doc = doc.clone();
            doc.resize(64, 64).unwrap();
            doc.resize(32, 32).unwrap();
            std::hint::black_box(&doc);
        });
    });
}

/// Benchmark: Per-kind variant counts on a 256x256 stage.
fn bench_kind_counts(c: &mut Criterion) {
    let doc = stress_stage(42);

    c.bench_function("kind_counts_stress_256x256", |b| {
        b.iter(|| std::hint::black_box(doc.grid.kind_counts()));
    });
}

criterion_group!(
    benches,
    bench_validate_stress,
    bench_toggle_sweep,
    bench_resize,
    bench_kind_counts
);
criterion_main!(benches);
