/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Accumulator Example
//!
//! Demonstrates using atomic floats as thread-safe accumulators.

use prism3_atomic_float::{
    AtomicF32,
    AtomicF64,
};
use std::sync::Arc;
use std::thread;

struct Stats {
    total: AtomicF64,
    peak: AtomicF64,
    last: AtomicF32,
}

fn main() {
    println!("=== Atomic Accumulator Example ===\n");

    // Example 1: Basic operations
    println!("1. Basic Operations:");
    let value = AtomicF64::default();
    println!("   Initial value: {}", value);
    println!("   After adding 1.2: {}", value.add(1.2));
    println!("   After adding 2.3: {}", value.add(2.3));
    println!("   Swap in 10.0, old value: {}", value.swap(10.0));
    println!("   Current value: {}", value.load());

    // Example 2: Multi-threaded accumulation
    println!("\n2. Multi-threaded Accumulation:");
    let stats = Arc::new(Stats {
        total: AtomicF64::default(),
        peak: AtomicF64::new(f64::NEG_INFINITY),
        last: AtomicF32::default(),
    });
    let num_threads = 8;
    let samples_per_thread = 10_000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let stats = stats.clone();
        let handle = thread::spawn(move || {
            for j in 0..samples_per_thread {
                let sample = ((i * samples_per_thread + j) % 64) as f64 * 0.25;
                stats.total.add(sample);
                stats.peak.fetch_max(sample);
                stats.last.store(sample as f32);
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!("   Total: {}", stats.total.load());
    println!("   Peak: {}", stats.peak.load());
    println!("   Last sample seen: {}", stats.last.load());

    // Example 3: Compare-and-swap
    println!("\n3. Compare-and-Swap:");
    let value = AtomicF32::new(1.5);
    println!("   CAS(1.5 -> 2.5): {}", value.compare_and_swap(1.5, 2.5));
    println!("   CAS(1.5 -> 3.5): {}", value.compare_and_swap(1.5, 3.5));
    match value.compare_set(1.5, 3.5) {
        Ok(_) => println!("   compare_set succeeded: {}", value.load()),
        Err(actual) => println!("   compare_set failed, actual value was {}", actual),
    }

    // Example 4: Functional updates
    println!("\n4. Functional Updates:");
    let value = AtomicF64::new(3.0);
    let old = value.fetch_update(|x| x * x);
    println!("   Squared - old: {}, new: {}", old, value.load());
    let new = value.update_and_get(|x| x.sqrt());
    println!("   Square root - new: {}", new);

    println!("\n=== Example completed ===");
}
