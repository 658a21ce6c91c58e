/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Floating Point
//!
//! Provides a lock-free atomic 64-bit floating point type. Implemented using
//! bit conversion with a 64-bit integer atomic.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::atomic_float_macro::impl_atomic_float;
use crate::atomic::substrate::{
    contended,
    AtomicU64,
    ORDER,
};
use crate::atomic::traits::{
    Atomic,
    AtomicFloat,
};

impl_atomic_float!(
    /// Atomic 64-bit floating point number.
    ///
    /// Holds the IEEE-754 binary64 bit pattern of the value in an
    /// `AtomicU64`. Every operation is `SeqCst` on that integer.
    ///
    /// # Alignment
    ///
    /// A bare `f64` is only 4-byte aligned on several 32-bit targets (e.g.
    /// x86), where a 64-bit atomic instruction on a misaligned address is
    /// not guaranteed to be atomic. This type is `#[repr(C, align(8))]`, so
    /// the cell is 8-byte aligned wherever it is embedded, and a compile-time
    /// assertion rejects any build where that does not hold.
    ///
    /// # Implementation Details
    ///
    /// `load`, `store`, `swap` and the compare-and-swap family move the bit
    /// pattern with `f64::to_bits()`/`f64::from_bits()`, preserving NaN
    /// payloads, signed zero and infinities exactly. Arithmetic is a
    /// read-compute-CAS loop.
    ///
    /// # Sharing
    ///
    /// The type is neither `Copy` nor `Clone`, and every operation takes
    /// `&self`, so a shared cell can never be moved or duplicated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_float::AtomicF64;
    /// use std::sync::Arc;
    /// use std::thread;
    ///
    /// let total = Arc::new(AtomicF64::default());
    /// let handles: Vec<_> = (0..4)
    ///     .map(|_| {
    ///         let total = total.clone();
    ///         thread::spawn(move || {
    ///             for _ in 0..1000 {
    ///                 total.add(0.25);
    ///             }
    ///         })
    ///     })
    ///     .collect();
    ///
    /// for handle in handles {
    ///     handle.join().unwrap();
    /// }
    ///
    /// assert_eq!(total.load(), 1000.0);
    /// ```
    ///
    /// # Author
    ///
    /// Haixing Hu
    #[repr(C, align(8))]
    AtomicF64,
    AtomicU64,
    f64,
    "64-bit floating point number"
);

#[cfg(not(feature = "loom"))]
const _: () = assert!(
    std::mem::size_of::<AtomicF64>() == 8 && std::mem::align_of::<AtomicF64>() >= 8,
    "AtomicF64 must be an 8-byte aligned 8-byte cell"
);
