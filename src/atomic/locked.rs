/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Lock-Guarded Float Cells
//!
//! `RwLock`-guarded float cells with the same operation set as the lock-free
//! ones. They exist as a baseline for benchmarks and as an oracle for
//! differential tests; production code should use `AtomicF32`/`AtomicF64`.
//!
//! Compare-and-swap compares bit patterns here too, so both implementations
//! agree on every outcome, including signed zero and NaN.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::{
    PoisonError,
    RwLock,
};

use crate::atomic::traits::{
    Atomic,
    AtomicFloat,
};

// A float cannot be left half-written by a panicking holder, so the value
// behind a poisoned lock is still valid.
fn recover<G>(cell: &'static str, poisoned: PoisonError<G>) -> G {
    #[cfg(feature = "tracing")]
    tracing::warn!(cell = cell, "recovering float cell from a poisoned lock");
    #[cfg(not(feature = "tracing"))]
    let _ = cell;
    poisoned.into_inner()
}

macro_rules! impl_locked_float {
    ($name:ident, $value_type:ty, $doc_type:expr) => {
        #[doc = concat!("Lock-guarded ", $doc_type, " cell.")]
        ///
        /// Every operation takes the lock, so it is never lock-free. Use it
        /// only to compare against the atomic cells.
        pub struct $name {
            value: RwLock<$value_type>,
        }

        impl $name {
            #[doc = concat!("Creates a new lock-guarded ", $doc_type, " cell.")]
            #[inline]
            pub const fn new(value: $value_type) -> Self {
                Self {
                    value: RwLock::new(value),
                }
            }

            fn modify<F>(&self, f: F) -> ($value_type, $value_type)
            where
                F: FnOnce($value_type) -> $value_type,
            {
                let mut guard = self
                    .value
                    .write()
                    .unwrap_or_else(|e| recover(stringify!($name), e));
                let old = *guard;
                let new = f(old);
                *guard = new;
                (old, new)
            }

            /// Loads the current value under the read lock.
            #[inline]
            pub fn load(&self) -> $value_type {
                *self
                    .value
                    .read()
                    .unwrap_or_else(|e| recover(stringify!($name), e))
            }

            /// Stores a new value under the write lock.
            #[inline]
            pub fn store(&self, value: $value_type) {
                self.modify(|_| value);
            }

            /// Stores a new value, returning the previous one.
            #[inline]
            pub fn swap(&self, value: $value_type) -> $value_type {
                self.modify(|_| value).0
            }

            /// Stores `desired` if the current bits equal the bits of
            /// `expected`.
            #[inline]
            pub fn compare_and_swap(&self, expected: $value_type, desired: $value_type) -> bool {
                self.compare_set(expected, desired).is_ok()
            }

            /// Compares and sets the value, reporting the observed value on
            /// failure.
            pub fn compare_set(&self, current: $value_type, new: $value_type) -> Result<(), $value_type> {
                let mut guard = self
                    .value
                    .write()
                    .unwrap_or_else(|e| recover(stringify!($name), e));
                if guard.to_bits() == current.to_bits() {
                    *guard = new;
                    Ok(())
                } else {
                    Err(*guard)
                }
            }

            /// Adds a delta, returning the new value.
            #[inline]
            pub fn add(&self, delta: $value_type) -> $value_type {
                self.modify(|current| current + delta).1
            }
        }

        impl Atomic for $name {
            type Value = $value_type;

            #[inline]
            fn load(&self) -> $value_type {
                self.load()
            }

            #[inline]
            fn store(&self, value: $value_type) {
                self.store(value);
            }

            #[inline]
            fn swap(&self, value: $value_type) -> $value_type {
                self.swap(value)
            }

            #[inline]
            fn compare_and_swap(&self, expected: $value_type, desired: $value_type) -> bool {
                self.compare_and_swap(expected, desired)
            }

            #[inline]
            fn compare_set(&self, current: $value_type, new: $value_type) -> Result<(), $value_type> {
                self.compare_set(current, new)
            }

            fn fetch_update<F>(&self, mut f: F) -> $value_type
            where
                F: FnMut($value_type) -> $value_type,
            {
                self.modify(|current| f(current)).0
            }

            fn update_and_get<F>(&self, mut f: F) -> $value_type
            where
                F: FnMut($value_type) -> $value_type,
            {
                self.modify(|current| f(current)).1
            }
        }

        impl AtomicFloat for $name {
            #[inline]
            fn add(&self, delta: $value_type) -> $value_type {
                self.add(delta)
            }

            fn sub(&self, delta: $value_type) -> $value_type {
                self.modify(|current| current - delta).1
            }

            fn fetch_add(&self, delta: $value_type) -> $value_type {
                self.modify(|current| current + delta).0
            }

            fn fetch_sub(&self, delta: $value_type) -> $value_type {
                self.modify(|current| current - delta).0
            }

            fn fetch_max(&self, value: $value_type) -> $value_type {
                self.modify(|current| current.max(value)).0
            }

            fn fetch_min(&self, value: $value_type) -> $value_type {
                self.modify(|current| current.min(value)).0
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.load())
                    .finish()
            }
        }
    };
}

impl_locked_float!(LockedF32, f32, "32-bit floating point");
impl_locked_float!(LockedF64, f64, "64-bit floating point");
