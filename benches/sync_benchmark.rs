/*!
 * Synchronization Primitives Benchmarks
 *
 * Uncontended and contended cost of the channel lock
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use os_primitives::ChannelLock;
use std::sync::Arc;
use std::thread;

fn bench_uncontended(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontended");
    let lock = ChannelLock::new();

    group.bench_function("lock_unlock", |b| {
        b.iter(|| {
            lock.lock();
            lock.unlock();
        });
    });

    group.bench_function("try_lock_unlock", |b| {
        b.iter(|| {
            black_box(lock.try_lock());
            lock.unlock();
        });
    });

    group.bench_function("guard", |b| {
        b.iter(|| {
            let _guard = black_box(lock.guard());
        });
    });

    lock.lock();
    group.bench_function("try_lock_held", |b| {
        b.iter(|| black_box(lock.try_lock()));
    });
    lock.unlock();

    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");

    for threads in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                let lock = Arc::new(ChannelLock::new());
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let lock = lock.clone();
                        thread::spawn(move || {
                            for _ in 0..100 {
                                let _guard = lock.guard();
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_uncontended, bench_contended);
criterion_main!(benches);
