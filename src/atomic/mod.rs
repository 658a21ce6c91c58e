/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Float Types
//!
//! Provides lock-free `f32`/`f64` cells on top of the integer atomics of the
//! selected substrate (std, `portable-atomic` or `loom`).
//!
//! # Features
//!
//! - Bit-exact `load`, `store`, `swap` and compare-and-swap
//! - Lock-free arithmetic through compare-and-swap retry loops
//! - Forced 8-byte alignment of the 64-bit cell on every target
//! - Lock-guarded reference cells sharing the same traits
//!
//! # Author
//!
//! Haixing Hu

mod atomic_f32;
mod atomic_f64;
mod atomic_float_macro;
mod locked;
mod substrate;
mod traits;

pub use atomic_f32::AtomicF32;
pub use atomic_f64::AtomicF64;
pub use locked::{
    LockedF32,
    LockedF64,
};
pub use traits::{
    Atomic,
    AtomicFloat,
};
