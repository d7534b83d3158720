use circdeque::CircularDeque;
use criterion::{black_box, Criterion, Throughput};

const OPS: usize = 100_000;

struct XorShift64 {
    a: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { a: if seed == 0 { 1 } else { seed } }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.a;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.a = x;
        x
    }
}

/// Random interleaving of all four end operations, biased towards insertion
/// so the deque keeps growing through the run.
pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    group.throughput(Throughput::Elements(OPS as u64));

    for &boxed in &[false, true] {
        let name = if boxed { "random_ends_boxed" } else { "random_ends_u64" };
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut rng = XorShift64::new(0x9E37_79B9_7F4A_7C15);
                if boxed {
                    churn(&mut rng, Box::new);
                } else {
                    churn(&mut rng, |v| v);
                }
            })
        });
    }

    group.finish();
}

fn churn<T>(rng: &mut XorShift64, make: impl Fn(u64) -> T) {
    let mut deque = CircularDeque::new();
    for _ in 0..OPS {
        let r = rng.next();
        match r % 5 {
            0 => deque.add_first(make(r)),
            1 | 2 => deque.add_last(make(r)),
            3 => {
                black_box(deque.remove_first().ok());
            }
            _ => {
                black_box(deque.remove_last().ok());
            }
        }
    }
    black_box(deque.len());
}
