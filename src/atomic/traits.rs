/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for the float cells, providing a unified interface
//! so generic code can run unchanged against the lock-free cells and the
//! lock-guarded reference cells.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for atomic cells.
///
/// Provides load, store, swap, compare-and-swap and functional updates.
/// Implementations compare values by bit pattern.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the atomic.
    type Value;

    /// Loads the current value.
    ///
    /// # Returns
    ///
    /// The current value.
    fn load(&self) -> Self::Value;

    /// Stores a new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    fn store(&self, value: Self::Value);

    /// Swaps the current value with a new value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to swap in.
    ///
    /// # Returns
    ///
    /// The old value.
    fn swap(&self, value: Self::Value) -> Self::Value;

    /// Stores `desired` if the current bits equal the bits of `expected`.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected current value.
    /// * `desired` - The new value to store on a match.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced.
    fn compare_and_swap(&self, expected: Self::Value, desired: Self::Value) -> bool;

    /// Compares and sets the value atomically.
    ///
    /// # Parameters
    ///
    /// * `current` - The expected current value.
    /// * `new` - The new value to set if current matches.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on failure where `actual` is
    /// the value observed instead.
    fn compare_set(&self, current: Self::Value, new: Self::Value) -> Result<(), Self::Value>;

    /// Updates the value using a function, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value. It may be called more than once.
    ///
    /// # Returns
    ///
    /// The old value before the update.
    fn fetch_update<F>(&self, f: F) -> Self::Value
    where
        F: FnMut(Self::Value) -> Self::Value;

    /// Updates the value using a function, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value. It may be called more than once.
    ///
    /// # Returns
    ///
    /// The new value after the update.
    fn update_and_get<F>(&self, f: F) -> Self::Value
    where
        F: FnMut(Self::Value) -> Self::Value;
}

/// Trait for atomic floating point cells.
///
/// Provides the arithmetic operations. Multiplication and division are
/// intentionally absent.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicFloat: Atomic {
    /// Adds a delta to the value, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The new value after adding.
    fn add(&self, delta: Self::Value) -> Self::Value;

    /// Subtracts a delta from the value, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    ///
    /// # Returns
    ///
    /// The new value after subtracting.
    fn sub(&self, delta: Self::Value) -> Self::Value;

    /// Adds a delta to the value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The old value before adding.
    fn fetch_add(&self, delta: Self::Value) -> Self::Value;

    /// Subtracts a delta from the value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    ///
    /// # Returns
    ///
    /// The old value before subtracting.
    fn fetch_sub(&self, delta: Self::Value) -> Self::Value;

    /// Stores the maximum of the current value and `value`, returning the
    /// old value.
    ///
    /// # Parameters
    ///
    /// * `value` - The value to compare with.
    ///
    /// # Returns
    ///
    /// The old value.
    fn fetch_max(&self, value: Self::Value) -> Self::Value;

    /// Stores the minimum of the current value and `value`, returning the
    /// old value.
    ///
    /// # Parameters
    ///
    /// * `value` - The value to compare with.
    ///
    /// # Returns
    ///
    /// The old value.
    fn fetch_min(&self, value: Self::Value) -> Self::Value;
}
