//! Criterion micro-benchmarks for allocate, release, and coalescing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tagheap_arena::TagArena;
use tagheap_bench::{checkerboard_arena, churned_arena};

/// Benchmark: allocate and immediately release 64 bytes on a fresh arena.
fn bench_alloc_release_fresh(c: &mut Criterion) {
    let mut arena = TagArena::default();
    c.bench_function("alloc_release_fresh_64", |b| {
        b.iter(|| {
            let p = arena.allocate(black_box(64)).unwrap();
            arena.release(p).unwrap();
        });
    });
}

/// Benchmark: fill a 4 KiB arena with 32-byte blocks, then release them all.
fn bench_fill_then_drain(c: &mut Criterion) {
    c.bench_function("fill_then_drain_4k_32", |b| {
        b.iter_batched(
            TagArena::default,
            |mut arena| {
                let mut ptrs = Vec::with_capacity(128);
                while let Ok(p) = arena.allocate(32) {
                    ptrs.push(p);
                }
                for p in ptrs {
                    arena.release(p).unwrap();
                }
                black_box(arena);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: first-fit scan that must walk past every small hole of a
/// checkerboard arena before failing.
fn bench_first_fit_miss_checkerboard(c: &mut Criterion) {
    let (mut arena, _live) = checkerboard_arena(4096, 8);
    c.bench_function("first_fit_miss_checkerboard", |b| {
        b.iter(|| {
            black_box(arena.allocate(black_box(64)).is_err());
        });
    });
}

/// Benchmark: one random operation against an arena in fragmented steady state.
fn bench_churn_step(c: &mut Criterion) {
    let (mut arena, mut work) = churned_arena(4096, 42, 2_000);
    c.bench_function("churn_step_4k", |b| {
        b.iter(|| {
            black_box(work.step(&mut arena));
        });
    });
}

/// Benchmark: a coalesce pass over a chain with nothing left to merge.
fn bench_coalesce_noop(c: &mut Criterion) {
    let (mut arena, _live) = checkerboard_arena(4096, 8);
    c.bench_function("coalesce_pass_noop_checkerboard", |b| {
        b.iter(|| {
            black_box(arena.coalesce_pass());
        });
    });
}

criterion_group!(
    benches,
    bench_alloc_release_fresh,
    bench_fill_then_drain,
    bench_first_fit_miss_checkerboard,
    bench_churn_step,
    bench_coalesce_noop
);
criterion_main!(benches);
