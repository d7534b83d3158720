use circdeque::CircularDeque;
use criterion::{black_box, Criterion};

pub fn run(c: &mut Criterion) {
    bench_push_pop_same_end(c);
    bench_fifo(c);
    bench_peek(c);
}

fn bench_push_pop_same_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro_stack");
    group.warm_up_time(std::time::Duration::from_millis(500));
    group.measurement_time(std::time::Duration::from_secs(1));
    group.sample_size(10);

    // One element in and out per iteration, so the store never grows.
    let mut deque = CircularDeque::new();
    group.bench_function("add_first_remove_first", |b| {
        b.iter(|| {
            deque.add_first(black_box(10u64));
            black_box(deque.remove_first().ok());
        })
    });

    group.bench_function("add_last_remove_last", |b| {
        b.iter(|| {
            deque.add_last(black_box(10u64));
            black_box(deque.remove_last().ok());
        })
    });

    group.finish();
}

fn bench_fifo(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro_fifo");

    group.bench_function("add_last_remove_first_1000", |b| {
        let mut deque = CircularDeque::new();
        b.iter(|| {
            for i in 0..1000u64 {
                deque.add_last(black_box(i));
            }
            let mut sum = 0;
            while let Ok(value) = deque.remove_first() {
                sum += value;
            }
            assert_eq!(sum, 499_500);
        })
    });

    group.finish();
}

fn bench_peek(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro_peek");

    let deque: CircularDeque<u64> = (0..64).collect();
    group.bench_function("peek_both_ends", |b| {
        b.iter(|| {
            black_box(deque.peek_first().ok());
            black_box(deque.peek_last().ok());
        })
    });

    group.finish();
}
