/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-float
//!
//! Lock-free atomic floating point cells built on integer atomics.
//!
//! Hardware exposes atomic instructions only for integers. `AtomicF32` and
//! `AtomicF64` store the IEEE-754 bit pattern of their value in a 32-bit or
//! 64-bit integer atomic and translate every float operation into an
//! operation on those bits. `add` has no hardware counterpart at all and is
//! built as a compare-and-swap retry loop.
//!
//! ## Guarantees
//!
//! - **Bit exactness**: NaN payloads, signed zero and infinities survive
//!   every operation unchanged
//! - **Bit-equality CAS**: `compare_and_swap(-0.0, x)` does not match a
//!   stored `+0.0`, and a NaN matches an identical stored NaN
//! - **Sequential consistency**: every operation is `SeqCst`
//! - **Lock-free**: no operation blocks, sleeps or allocates
//! - **Alignment**: `AtomicF64` is 8-byte aligned on every target
//!
//! ## Cargo Features
//!
//! - `portable-atomic`: use `portable_atomic` integers as the substrate
//! - `loom`: use `loom` integers, for model checking
//! - `serde`: serialize cells as their current value
//! - `tracing`: emit `trace!` events for lost compare-and-swap races
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_float::AtomicF64;
//! use std::thread;
//!
//! let total = AtomicF64::new(0.0);
//!
//! thread::scope(|s| {
//!     for _ in 0..8 {
//!         s.spawn(|| {
//!             for _ in 0..1000 {
//!                 total.add(0.5);
//!             }
//!         });
//!     }
//! });
//!
//! assert_eq!(total.load(), 4000.0);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod atomic;

// Re-export all atomic types and traits
pub use atomic::{
    Atomic,
    AtomicF32,
    AtomicF64,
    AtomicFloat,
    LockedF32,
    LockedF64,
};
