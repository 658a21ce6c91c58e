/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_float::{
    LockedF32,
    LockedF64,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_basic_operations() {
    let cell = LockedF32::new(1.0);
    assert_eq!(cell.load(), 1.0);
    cell.store(2.0);
    assert_eq!(cell.swap(3.0), 2.0);
    assert!(cell.compare_and_swap(3.0, 4.0));
    assert!(!cell.compare_and_swap(3.0, 5.0));
    assert_eq!(cell.add(0.5), 4.5);
}

#[test]
fn test_compare_uses_bits() {
    let cell = LockedF64::new(f64::NAN);
    assert!(cell.compare_and_swap(f64::NAN, 1.0));
    cell.store(0.0);
    assert_eq!(cell.compare_set(-0.0, 1.0), Err(0.0));
}

#[test]
fn test_debug() {
    let cell = LockedF64::new(0.5);
    let debug_str = format!("{:?}", cell);
    assert!(debug_str.contains("LockedF64"));
    assert!(debug_str.contains("0.5"));
}

#[test]
fn test_recovers_from_poisoned_lock() {
    let cell = Arc::new(LockedF64::new(1.0));
    let poisoner = cell.clone();
    let result = thread::spawn(move || {
        use prism3_atomic_float::Atomic;
        poisoner.fetch_update(|_| panic!("poison the lock"));
    })
    .join();
    assert!(result.is_err());

    assert_eq!(cell.load(), 1.0);
    assert_eq!(cell.add(1.0), 2.0);
}

#[test]
fn test_concurrent_add() {
    let cell = LockedF32::default();
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..1000 {
                    cell.add(1.0);
                }
            });
        }
    });
    assert_eq!(cell.load(), 4000.0);
}
