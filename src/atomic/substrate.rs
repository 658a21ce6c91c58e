/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Bit-Atomic Substrate
//!
//! Selects the integer atomics the float cells are built on. Every float
//! operation in this crate bottoms out in one of the `load`, `store`, `swap`
//! or `compare_exchange` calls of the types re-exported here.
//!
//! - default: `std::sync::atomic`
//! - `portable-atomic`: `portable_atomic`, for targets whose std lacks
//!   64-bit atomics
//! - `loom`: `loom::sync::atomic`, for model checking (takes precedence)
//!
//! # Author
//!
//! Haixing Hu

#[cfg(feature = "loom")]
pub use loom::sync::atomic::{
    AtomicU32,
    AtomicU64,
    Ordering,
};

#[cfg(all(feature = "portable-atomic", not(feature = "loom")))]
pub use portable_atomic::{
    AtomicU32,
    AtomicU64,
    Ordering,
};

#[cfg(not(any(feature = "portable-atomic", feature = "loom")))]
pub use std::sync::atomic::{
    AtomicU32,
    AtomicU64,
    Ordering,
};

/// The only ordering the float cells use.
pub const ORDER: Ordering = Ordering::SeqCst;

/// Called after a retry loop loses a compare-and-swap race.
///
/// Spins (never yields or sleeps outside loom) and, with the `tracing`
/// feature, records the lost attempt.
#[inline]
pub fn contended(cell: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "prism3_atomic_float::contention",
        cell = cell,
        "compare-and-swap lost, retrying"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = cell;

    #[cfg(feature = "loom")]
    loom::hint::spin_loop();
    #[cfg(not(feature = "loom"))]
    std::hint::spin_loop();
}
