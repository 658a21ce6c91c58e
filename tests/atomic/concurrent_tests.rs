/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_float::{
    AtomicF32,
    AtomicF64,
};
use std::sync::atomic::{
    AtomicBool as StdAtomicBool,
    AtomicUsize as StdAtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 10;
const ITERATIONS_PER_THREAD: usize = 10_000;

// Test contended additions with an exactly representable delta
#[test]
fn test_concurrent_add_no_lost_updates() {
    let sum = Arc::new(AtomicF64::new(0.0));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let sum = sum.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            for _ in 0..ITERATIONS_PER_THREAD {
                sum.add(0.125);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(sum.load(), (NUM_THREADS * ITERATIONS_PER_THREAD) as f64 * 0.125);
}

// Test that every returned sum is distinct, i.e. each add commits once
#[test]
fn test_concurrent_add_returns_distinct_sums() {
    let sum = AtomicF32::new(0.0);
    let mut results: Vec<f32> = thread::scope(|s| {
        let handles: Vec<_> = (0..NUM_THREADS)
            .map(|_| {
                let sum = &sum;
                s.spawn(move || (0..100).map(|_| sum.add(1.0)).collect::<Vec<_>>())
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    results.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let expected: Vec<f32> = (1..=NUM_THREADS * 100).map(|i| i as f32).collect();
    assert_eq!(results, expected);
}

// Test mixed add and sub leaving the value balanced
#[test]
fn test_concurrent_add_sub_balance() {
    let value = AtomicF64::new(100.0);
    thread::scope(|s| {
        for i in 0..NUM_THREADS {
            let value = &value;
            s.spawn(move || {
                for _ in 0..1000 {
                    if i % 2 == 0 {
                        value.add(0.5);
                    } else {
                        value.sub(0.5);
                    }
                }
            });
        }
    });
    assert_eq!(value.load(), 100.0);
}

// Test concurrent max tracking
#[test]
fn test_concurrent_fetch_max() {
    let max = AtomicF64::new(f64::NEG_INFINITY);
    thread::scope(|s| {
        for i in 0..NUM_THREADS {
            let max = &max;
            s.spawn(move || {
                for j in 0..1000 {
                    max.fetch_max((i * 1000 + j) as f64);
                }
            });
        }
    });
    assert_eq!(max.load(), (NUM_THREADS * 1000 - 1) as f64);
}

// Test that loads never observe a torn 64-bit value
#[test]
fn test_no_torn_reads() {
    let a = f64::from_bits(0x0000_0000_FFFF_FFFF);
    let b = f64::from_bits(0x3FF0_0000_0000_0000);
    let cell = AtomicF64::new(a);
    let done = StdAtomicBool::new(false);
    let torn = StdAtomicUsize::new(0);

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..100_000 {
                cell.store(if i % 2 == 0 { b } else { a });
            }
            done.store(true, Ordering::SeqCst);
        });
        for _ in 0..2 {
            s.spawn(|| {
                while !done.load(Ordering::SeqCst) {
                    let bits = cell.load().to_bits();
                    if bits != a.to_bits() && bits != b.to_bits() {
                        torn.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }
    });

    assert_eq!(torn.load(Ordering::Relaxed), 0);
}

// Test concurrent CAS increments through the failure value
#[test]
fn test_concurrent_compare_set_loop() {
    let atomic = Arc::new(AtomicF32::new(0.0));
    let success_count = Arc::new(StdAtomicUsize::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let success_count = success_count.clone();
        let handle = thread::spawn(move || {
            let mut current = atomic.load();
            loop {
                match atomic.compare_set_weak(current, current + 1.0) {
                    Ok(_) => {
                        success_count.fetch_add(1, Ordering::Relaxed);
                        break;
                    }
                    Err(actual) => current = actual,
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(atomic.load(), NUM_THREADS as f32);
    assert_eq!(success_count.load(Ordering::Relaxed), NUM_THREADS);
}
