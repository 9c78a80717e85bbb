use criterion::{criterion_group, Criterion};
use rwmap::ListMap;
use std::sync::atomic::{AtomicUsize, Ordering};

fn read_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("** rwmap::basic::mapx_list::MapxList **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let i = AtomicUsize::new(0);
    let db: ListMap<usize, Vec<usize>> = ListMap::new();

    group.bench_function(" write ", |b| {
        b.iter(|| {
            let n = i.fetch_add(1, Ordering::SeqCst);
            db.set(n, vec![n; 16]);
        })
    });

    group.bench_function(" read ", |b| {
        b.iter(|| {
            let n = i.fetch_sub(1, Ordering::SeqCst);
            db.get(&n);
        })
    });

    group.bench_function(" remove then append ", |b| {
        b.iter(|| {
            if let Some((k, v)) = db.pop() {
                db.set(k, v);
            }
        })
    });

    group.bench_function(" keys ", |b| {
        b.iter(|| db.keys().len())
    });

    group.finish();
}

criterion_group!(benches, read_write);
