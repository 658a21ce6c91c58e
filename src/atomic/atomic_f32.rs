/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Floating Point
//!
//! Provides a lock-free atomic 32-bit floating point type. Implemented using
//! bit conversion with a 32-bit integer atomic.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::atomic_float_macro::impl_atomic_float;
use crate::atomic::substrate::{
    contended,
    AtomicU32,
    ORDER,
};
use crate::atomic::traits::{
    Atomic,
    AtomicFloat,
};

impl_atomic_float!(
    /// Atomic 32-bit floating point number.
    ///
    /// Holds the IEEE-754 binary32 bit pattern of the value in an
    /// `AtomicU32`. Every operation is `SeqCst` on that integer.
    ///
    /// # Implementation Details
    ///
    /// Hardware has no atomic float instructions, so `load`, `store`,
    /// `swap` and the compare-and-swap family move the bit pattern with
    /// `f32::to_bits()`/`f32::from_bits()`, preserving NaN payloads, signed
    /// zero and infinities exactly. Arithmetic (`add`, `sub`, `fetch_max`,
    /// ...) is a read-compute-CAS loop.
    ///
    /// # Sharing
    ///
    /// The type is neither `Copy` nor `Clone`, and every operation takes
    /// `&self`. Once a cell is shared, the borrow checker refuses to move or
    /// duplicate it, so all threads always address the same memory.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_float::AtomicF32;
    /// use std::thread;
    ///
    /// let sum = AtomicF32::new(0.0);
    ///
    /// thread::scope(|s| {
    ///     for _ in 0..10 {
    ///         s.spawn(|| {
    ///             for _ in 0..100 {
    ///                 sum.add(0.5);
    ///             }
    ///         });
    ///     }
    /// });
    ///
    /// assert_eq!(sum.load(), 500.0);
    /// ```
    ///
    /// # Author
    ///
    /// Haixing Hu
    #[repr(transparent)]
    AtomicF32,
    AtomicU32,
    f32,
    "32-bit floating point number"
);

#[cfg(not(feature = "loom"))]
const _: () = assert!(
    std::mem::size_of::<AtomicF32>() == 4 && std::mem::align_of::<AtomicF32>() >= 4,
    "AtomicF32 must be a naturally aligned 4-byte cell"
);
