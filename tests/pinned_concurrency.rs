// ==============================================
// PINNED CACHE CONCURRENCY TESTS (integration)
// ==============================================
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use pincache::{CacheConfig, PinnedCache};

const THREADS: usize = 8;
const OPS_PER_THREAD: usize = 500;

#[test]
fn mixed_operations_keep_invariants() {
    let cache = PinnedCache::new(32).unwrap();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let cache = cache.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..OPS_PER_THREAD {
                    let key = format!("t{}_{}", thread_id, i % 40);
                    match i % 5 {
                        0 | 1 => {
                            cache.put(&key, i, false).unwrap();
                        },
                        2 => {
                            let _ = cache.get(&key);
                        },
                        3 => {
                            let pinned_key = format!("pin_{}_{}", thread_id, i % 3);
                            let _ = cache.put(&pinned_key, i, true);
                        },
                        _ => {
                            let pinned_key = format!("pin_{}_{}", thread_id, i % 3);
                            let _ = cache.remove_permanent(&pinned_key);
                        },
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    cache.check_invariants().unwrap();
    let stats = cache.stats();
    assert!(stats.len <= stats.capacity);
    assert!(stats.capacity >= stats.initial_capacity);
    assert!(stats.pinned_count <= stats.len);
}

#[test]
fn concurrent_pinned_inserts_grow_capacity_without_losing_entries() {
    let config = CacheConfig {
        initial_capacity: 4,
        growth_step: 2,
        shrink_step: 1,
    };
    let cache = PinnedCache::with_config(config).unwrap();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let cache = cache.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..10 {
                    cache
                        .put(&format!("pin_{}_{}", thread_id, i), thread_id, true)
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), THREADS * 10);
    assert_eq!(cache.pinned_count(), THREADS * 10);
    for thread_id in 0..THREADS {
        for i in 0..10 {
            let value = cache.get_as::<usize>(&format!("pin_{}_{}", thread_id, i)).unwrap();
            assert_eq!(*value, thread_id);
        }
    }
    cache.check_invariants().unwrap();
}

#[test]
fn readers_never_see_a_torn_state() {
    let cache = PinnedCache::new(16).unwrap();
    cache.put("anchor", 0u64, true).unwrap();
    let barrier = Arc::new(Barrier::new(THREADS + 1));
    let violations = Arc::new(AtomicUsize::new(0));

    let readers: Vec<_> = (0..THREADS)
        .map(|_| {
            let cache = cache.clone();
            let barrier = Arc::clone(&barrier);
            let violations = Arc::clone(&violations);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..OPS_PER_THREAD {
                    let stats = cache.stats();
                    if stats.len > stats.capacity || stats.pinned_count > stats.len {
                        violations.fetch_add(1, Ordering::Relaxed);
                    }
                    if cache.get("anchor").is_err() {
                        violations.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    let writer = {
        let cache = cache.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..(OPS_PER_THREAD * 4) {
                cache.put(&format!("churn_{}", i), i, false).unwrap();
            }
        })
    };

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(violations.load(Ordering::Relaxed), 0);
    assert_eq!(cache.capacity(), 16);
    cache.check_invariants().unwrap();
}

#[test]
fn clear_races_with_writers() {
    let cache = PinnedCache::new(8).unwrap();
    let barrier = Arc::new(Barrier::new(3));

    let writer = {
        let cache = cache.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..OPS_PER_THREAD {
                cache.put(&format!("k{}", i), i, i % 2 == 0).unwrap();
            }
        })
    };
    let clearer = {
        let cache = cache.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..50 {
                cache.clear();
                thread::yield_now();
            }
        })
    };

    barrier.wait();
    writer.join().unwrap();
    clearer.join().unwrap();

    cache.check_invariants().unwrap();
    cache.clear();
    assert_eq!(cache.capacity(), 8);
    assert!(cache.is_empty());
}
