use rwmap::{IntIntMap, ListMap, Mapx};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Barrier,
    },
    thread,
};

const THREADS: usize = 16;

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn func_lock_runs_factory_once() {
    init_log();

    let m: Arc<Mapx<u64, u64>> = Arc::new(Mapx::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles = (0..THREADS)
        .map(|i| {
            let m = Arc::clone(&m);
            let calls = Arc::clone(&calls);
            let b = Arc::clone(&barrier);
            thread::spawn(move || {
                b.wait();
                m.get_or_set_func_lock(7, || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    i as u64
                })
            })
        })
        .collect::<Vec<_>>();

    let seen = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(seen.iter().all(|v| *v == seen[0]));
    assert_eq!(m.get(&7), Some(seen[0]));
}

#[test]
fn func_unlocked_agrees_on_one_value() {
    init_log();

    let m: Arc<Mapx<u64, u64>> = Arc::new(Mapx::new());
    let stored = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles = (0..THREADS)
        .map(|i| {
            let m = Arc::clone(&m);
            let stored = Arc::clone(&stored);
            let b = Arc::clone(&barrier);
            thread::spawn(move || {
                b.wait();
                if m.set_if_not_exist_func(1, || i as u64) {
                    stored.fetch_add(1, Ordering::SeqCst);
                }
                m.get_or_set_func(2, || i as u64)
            })
        })
        .collect::<Vec<_>>();

    let seen = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect::<Vec<_>>();

    // whoever stored first wins, every caller sees that value
    assert_eq!(stored.load(Ordering::SeqCst), 1);
    assert!(seen.iter().all(|v| Some(*v) == m.get(&2)));
    assert_eq!(m.len(), 2);
}

#[test]
fn readers_and_writers() {
    init_log();

    let m = Arc::new(IntIntMap::new());
    let barrier = Arc::new(Barrier::new(THREADS));
    let per_thread = 1000;

    let handles = (0..THREADS as i64)
        .map(|t| {
            let m = Arc::clone(&m);
            let b = Arc::clone(&barrier);
            thread::spawn(move || {
                b.wait();
                for j in 0..per_thread {
                    if 0 == t % 2 {
                        m.set(t * per_thread + j, j);
                    } else {
                        let _ = m.get(&((t - 1) * per_thread + j));
                        let _ = m.len();
                        m.iterator(|_, _| false);
                    }
                }
            })
        })
        .collect::<Vec<_>>();

    handles.into_iter().for_each(|h| h.join().unwrap());

    assert_eq!(m.len(), (THREADS as i64 / 2 * per_thread) as usize);
    assert_eq!(m.get(&per_thread.saturating_sub(1)), Some(per_thread - 1));
}

#[test]
fn cross_merge_does_not_deadlock() {
    init_log();

    let a: Arc<ListMap<u32, u32>> = Arc::new((0..100).map(|i| (i, i)).collect());
    let b: Arc<ListMap<u32, u32>> = Arc::new((100..200).map(|i| (i, i)).collect());
    let barrier = Arc::new(Barrier::new(2));

    let h1 = {
        let (a, b, barrier) = (Arc::clone(&a), Arc::clone(&b), Arc::clone(&barrier));
        thread::spawn(move || {
            barrier.wait();
            (0..50).for_each(|_| a.merge(&b));
        })
    };
    let h2 = {
        let (a, b, barrier) = (Arc::clone(&a), Arc::clone(&b), Arc::clone(&barrier));
        thread::spawn(move || {
            barrier.wait();
            (0..50).for_each(|_| b.merge(&a));
        })
    };

    h1.join().unwrap();
    h2.join().unwrap();

    assert_eq!(a.len(), 200);
    assert_eq!(b.len(), 200);
    assert_eq!(a.front(), Some((0, 0)));
}

#[test]
fn clone_under_concurrent_writes() {
    init_log();

    let m = Arc::new(IntIntMap::new());
    let writer = {
        let m = Arc::clone(&m);
        thread::spawn(move || {
            (0..10_000).for_each(|i| m.set(i, i));
        })
    };

    let mut last = 0;
    while last < 10_000 {
        let c = m.clone();
        let n = c.len();
        // a clone is a consistent cut: every key below its size is there
        assert!(n >= last);
        assert!((0..n as i64).all(|i| c.get(&i) == Some(i)));
        last = n;
        if writer.is_finished() {
            break;
        }
    }

    writer.join().unwrap();
    assert_eq!(m.len(), 10_000);
}
