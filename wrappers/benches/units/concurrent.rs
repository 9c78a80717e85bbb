use criterion::{criterion_group, Criterion};
use rwmap::Mapx;
use std::{
    sync::{Arc, Barrier},
    time::Instant,
};

fn concurrent_independent_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("** rwmap::concurrent::independent_writes **");
    group.sample_size(10);

    let thread_counts = [2, 4, 8, 16];

    for &num_threads in &thread_counts {
        group.bench_function(format!("{} threads", num_threads), |b| {
            b.iter_custom(|iters| {
                let iters_per_thread = (iters / num_threads) + 1;
                let barrier = Arc::new(Barrier::new(num_threads as usize + 1));
                let mut handles = vec![];

                for _ in 0..num_threads {
                    let b = barrier.clone();
                    handles.push(std::thread::spawn(move || {
                        let db: Mapx<_, _> = Mapx::new();
                        b.wait();
                        for j in 0..iters_per_thread {
                            db.set(j, vec![0u8; 64]);
                        }
                        b.wait();
                    }));
                }

                barrier.wait();
                let start = Instant::now();
                barrier.wait();
                let elapsed = start.elapsed();

                for h in handles {
                    h.join().unwrap();
                }

                elapsed
            })
        });
    }

    group.finish();
}

fn concurrent_hotspot_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("** rwmap::concurrent::hotspot_writes **");
    group.sample_size(10);

    let thread_counts = [2, 4, 8, 16];

    for &num_threads in &thread_counts {
        group.bench_function(format!("{} threads", num_threads), |b| {
            b.iter_custom(|iters| {
                let iters_per_thread = (iters / num_threads) + 1;
                let shared_db: Arc<Mapx<_, _>> = Arc::new(Mapx::new());
                let barrier = Arc::new(Barrier::new(num_threads as usize + 1));
                let mut handles = vec![];

                for i in 0..num_threads {
                    let db = Arc::clone(&shared_db);
                    let b = barrier.clone();
                    handles.push(std::thread::spawn(move || {
                        b.wait();
                        for j in 0..iters_per_thread {
                            db.set(i * iters_per_thread + j, vec![0u8; 64]);
                        }
                        b.wait();
                    }));
                }

                barrier.wait();
                let start = Instant::now();
                barrier.wait();
                let elapsed = start.elapsed();

                for h in handles {
                    h.join().unwrap();
                }

                elapsed
            })
        });
    }

    group.finish();
}

fn concurrent_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("** rwmap::concurrent::reads **");
    group.sample_size(10);

    let num_items = 10_000u64;
    let db: Arc<Mapx<_, _>> = Arc::new(Mapx::new());
    for k in 0..num_items {
        db.set(k, vec![0u8; 64]);
    }

    let thread_counts = [2, 4, 8, 16];

    for &num_threads in &thread_counts {
        group.bench_function(format!("{} threads", num_threads), |b| {
            b.iter_custom(|iters| {
                let iters_per_thread = (iters / num_threads) + 1;
                let barrier = Arc::new(Barrier::new(num_threads as usize + 1));
                let mut handles = vec![];

                for _ in 0..num_threads {
                    let db = Arc::clone(&db);
                    let b = barrier.clone();
                    handles.push(std::thread::spawn(move || {
                        b.wait();
                        for j in 0..iters_per_thread {
                            let _ = db.get(&(j % num_items));
                        }
                        b.wait();
                    }));
                }

                barrier.wait();
                let start = Instant::now();
                barrier.wait();
                let elapsed = start.elapsed();

                for h in handles {
                    h.join().unwrap();
                }

                elapsed
            })
        });
    }

    group.finish();
}

fn concurrent_get_or_set_func_lock(c: &mut Criterion) {
    let mut group = c.benchmark_group("** rwmap::concurrent::get_or_set_func_lock **");
    group.sample_size(10);

    let thread_counts = [2, 4, 8, 16];

    for &num_threads in &thread_counts {
        group.bench_function(format!("{} threads", num_threads), |b| {
            b.iter_custom(|iters| {
                let iters_per_thread = (iters / num_threads) + 1;
                let db: Arc<Mapx<u64, u64>> = Arc::new(Mapx::new());
                let barrier = Arc::new(Barrier::new(num_threads as usize + 1));
                let mut handles = vec![];

                for _ in 0..num_threads {
                    let db = Arc::clone(&db);
                    let b = barrier.clone();
                    handles.push(std::thread::spawn(move || {
                        b.wait();
                        for j in 0..iters_per_thread {
                            db.get_or_set_func_lock(j % 256, || j);
                        }
                        b.wait();
                    }));
                }

                barrier.wait();
                let start = Instant::now();
                barrier.wait();
                let elapsed = start.elapsed();

                for h in handles {
                    h.join().unwrap();
                }

                elapsed
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    concurrent_independent_writes,
    concurrent_hotspot_writes,
    concurrent_reads,
    concurrent_get_or_set_func_lock
);
