//! Criterion benchmarks for arena-backed and heap-backed pushes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use arenavec_core::{ArenaAllocator, GrowVec};

/// Elements needed to hold every block a doubling array of `n` takes.
fn arena_elems_for(n: usize) -> usize {
    2 * n.next_power_of_two()
}

fn bench_push(c: &mut Criterion) {
    let ns: Vec<usize> = vec![16, 256, 4_096, 65_536];

    let mut group = c.benchmark_group("ArenaPush");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let alloc = ArenaAllocator::<u64>::new(arena_elems_for(n)).unwrap();
                let mut values = GrowVec::new_in(alloc);
                for i in 0..n as u64 {
                    values.push(i).unwrap();
                }
                values.len()
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("HeapPush");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut values = GrowVec::new();
                for i in 0..n as u64 {
                    values.push(i).unwrap();
                }
                values.len()
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("ArenaReservedPush");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let alloc = ArenaAllocator::<u64>::new(n).unwrap();
                let mut values = GrowVec::with_capacity_in(n, alloc).unwrap();
                for i in 0..n as u64 {
                    values.push(i).unwrap();
                }
                values.len()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push);
criterion_main!(benches);
