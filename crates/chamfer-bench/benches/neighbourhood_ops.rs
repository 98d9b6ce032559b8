//! Criterion micro-benchmarks for neighbourhood and region traversal.

use chamfer_core::Region;
use chamfer_grid::NeighbourTable;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark: build neighbour tables for 1 to 5 dimensions.
fn bench_neighbour_table(c: &mut Criterion) {
    c.bench_function("neighbour_table_1_to_5d", |b| {
        b.iter(|| {
            for ndim in 1..=5 {
                black_box(NeighbourTable::new(black_box(ndim)).ok());
            }
        });
    });
}

/// Benchmark: step a coordinate through every cell of a 100x100 region.
fn bench_region_advance_10k(c: &mut Criterion) {
    let region = Region::from_shape(&[100, 100]).unwrap();

    c.bench_function("region_advance_10k", |b| {
        b.iter(|| {
            let mut index = [0i32; 2];
            let mut n = 0u32;
            while region.advance(&mut index) {
                n += 1;
            }
            black_box(n);
        });
    });
}

/// Benchmark: interior test for every cell of a 100x100 region.
fn bench_region_is_interior_10k(c: &mut Criterion) {
    let region = Region::from_shape(&[100, 100]).unwrap();

    c.bench_function("region_is_interior_10k", |b| {
        b.iter(|| {
            let interior = region.iter().filter(|i| region.is_interior(i)).count();
            black_box(interior);
        });
    });
}

criterion_group!(
    benches,
    bench_neighbour_table,
    bench_region_advance_10k,
    bench_region_is_interior_10k
);
criterion_main!(benches);
