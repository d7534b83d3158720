use circdeque::{CircularDeque, GrowthPolicy};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

/// Fills a fresh deque so every doubling (and its allocation) is measured.
pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");

    for &size in &SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("doubling_from_8", size), &size, |b, &size| {
            b.iter(|| {
                let mut deque = CircularDeque::new();
                for i in 0..size {
                    if i % 2 == 0 {
                        deque.add_first(i);
                    } else {
                        deque.add_last(i);
                    }
                }
                black_box(deque);
            })
        });

        group.bench_with_input(BenchmarkId::new("quadrupling_from_8", size), &size, |b, &size| {
            let policy = GrowthPolicy::new(8, 4).expect("valid policy");
            b.iter(|| {
                let mut deque = CircularDeque::with_policy(policy).expect("allocation");
                for i in 0..size {
                    deque.add_last(i);
                }
                black_box(deque);
            })
        });
    }

    group.finish();
}
