//! # Cycle Benchmarks
//!
//! Performance benchmarks for cyrank-core cycle discovery and scoring.
//!
//! Run with: `cargo bench -p cyrank-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cyrank_core::{Graph, crimp, cycle_ratio, find_squares, find_triangles};
use std::hint::black_box;

/// Ring of N nodes with a chord every third node: plenty of triangles and
/// squares without combinatorial blowup.
fn create_chorded_ring(size: u64) -> Graph<u64> {
    let mut graph = Graph::new();
    for i in 0..size {
        graph.add_edge(i, (i + 1) % size);
        if i % 3 == 0 {
            graph.add_edge(i, (i + 2) % size);
        }
    }
    graph
}

/// Square grid of side N: chordless squares everywhere, no triangles.
fn create_grid(side: u64) -> Graph<u64> {
    let mut graph = Graph::new();
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            if col + 1 < side {
                graph.add_edge(id, id + 1);
            }
            if row + 1 < side {
                graph.add_edge(id, id + side);
            }
        }
    }
    graph
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_triangles");

    for size in [100, 500, 1000].iter() {
        let graph = create_chorded_ring(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, g| {
            b.iter(|| black_box(find_triangles(g)));
        });
    }

    group.finish();
}

fn bench_squares(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_squares");

    for side in [10, 20, 30].iter() {
        let graph = create_grid(*side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &graph, |b, g| {
            b.iter(|| black_box(find_squares(g)));
        });
    }

    group.finish();
}

fn bench_crimp(c: &mut Criterion) {
    let mut group = c.benchmark_group("crimp");

    for size in [100, 300].iter() {
        let graph = create_chorded_ring(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, g| {
            b.iter(|| black_box(crimp(g)));
        });
    }

    group.finish();
}

fn bench_cycle_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_ratio");
    // The baseline engine is the expensive one; keep sizes modest.
    group.sample_size(10);

    for size in [50, 100].iter() {
        let graph = create_chorded_ring(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, g| {
            b.iter(|| black_box(cycle_ratio(g)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_triangles,
    bench_squares,
    bench_crimp,
    bench_cycle_ratio,
);

criterion_main!(benches);
