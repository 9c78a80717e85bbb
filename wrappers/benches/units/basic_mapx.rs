use criterion::{criterion_group, Criterion};
use rand::Rng;
use rwmap::{IntIntMap, UnsyncMapx};
use std::sync::atomic::{AtomicI64, Ordering};

fn read_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("** rwmap::basic::mapx::Mapx **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let i = AtomicI64::new(0);
    let db = IntIntMap::new();

    group.bench_function(" write ", |b| {
        b.iter(|| {
            let n = i.fetch_add(1, Ordering::SeqCst);
            db.set(n, n);
        })
    });

    group.bench_function(" read ", |b| {
        b.iter(|| {
            let n = i.fetch_sub(1, Ordering::SeqCst);
            db.get(&n);
        })
    });

    group.bench_function(" batch write (100 items) ", |b| {
        b.iter(|| {
            let base = i.fetch_add(100, Ordering::SeqCst);
            db.sets((base..base + 100).map(|n| (n, n)));
        })
    });

    group.bench_function(" get_or_set_func_lock ", |b| {
        b.iter(|| {
            let n = i.fetch_add(1, Ordering::SeqCst) % 1024;
            db.get_or_set_func_lock(n, || n);
        })
    });

    group.finish();
}

fn random_read_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("** rwmap::basic::mapx::Mapx **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let mut rng = rand::thread_rng();
    let db = IntIntMap::new();
    let mut keys = vec![];
    group.bench_function(" random write ", |b| {
        b.iter(|| {
            let n = rng.gen::<i64>();
            db.set(n, n);
            keys.push(n);
        })
    });

    group.bench_function(" random read ", |b| {
        b.iter(|| {
            let index: usize = rng.gen_range(0..keys.len());
            keys.get(index).map(|key| db.get(key));
        })
    });
    group.finish();
}

fn unsync_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("** rwmap::basic::mapx::UnsyncMapx **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let mut n = 0i64;
    let db: UnsyncMapx<i64, i64> = UnsyncMapx::new();

    group.bench_function(" write ", |b| {
        b.iter(|| {
            n += 1;
            db.set(n, n);
        })
    });

    group.finish();
}

criterion_group!(benches, read_write, random_read_write, unsync_write);
