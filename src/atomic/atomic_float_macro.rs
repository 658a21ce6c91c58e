/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Float Macro
//!
//! Provides a macro to generate the atomic floating point types. Both widths
//! share one operation set, differing only in the bit substrate, the float
//! type and the layout attributes of the generated struct.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate an atomic floating point type.
///
/// Generates the struct (carrying the caller-supplied attributes, which is
/// where the type documentation and `repr` live), its inherent methods, the
/// `Atomic` and `AtomicFloat` trait implementations, and the `Default`,
/// `From`, `Debug`, `Display` and (optional) serde implementations.
///
/// Every operation goes through the bit pattern: values are converted with
/// `to_bits`/`from_bits` and compared as integers. No float comparison is
/// ever used to decide whether a compare-and-swap succeeds.
///
/// # Parameters
///
/// * `$attr` - Attributes for the generated struct (docs, `repr`).
/// * `$name` - The name of the atomic type (e.g., `AtomicF32`).
/// * `$bits_type` - The substrate atomic holding the bits (e.g.,
///   `AtomicU32`).
/// * `$value_type` - The float type (e.g., `f32`).
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   floating point number").
macro_rules! impl_atomic_float {
    (
        $(#[$attr:meta])*
        $name:ident,
        $bits_type:ty,
        $value_type:ty,
        $doc_type:expr
    ) => {
        $(#[$attr])*
        pub struct $name {
            inner: $bits_type,
        }

        impl $name {
            #[doc = concat!("Creates a new atomic ", $doc_type, ".")]
            ///
            /// The value's bit pattern is stored unchanged, so NaN payloads
            /// and the sign of zero survive.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(1.5);")]
            /// assert_eq!(atomic.load(), 1.5);
            /// ```
            #[cfg(not(feature = "loom"))]
            #[inline]
            pub const fn new(value: $value_type) -> Self {
                Self {
                    inner: <$bits_type>::new(value.to_bits()),
                }
            }

            #[doc = concat!("Creates a new atomic ", $doc_type, ".")]
            ///
            /// Loom atomics cannot be built in a const context.
            #[cfg(feature = "loom")]
            pub fn new(value: $value_type) -> Self {
                Self {
                    inner: <$bits_type>::new(value.to_bits()),
                }
            }

            /// Loads the current value.
            ///
            /// Reads the bits with `SeqCst` ordering and reinterprets them;
            /// no rounding or NaN canonicalization happens.
            ///
            /// # Returns
            ///
            /// The current value.
            #[inline]
            pub fn load(&self) -> $value_type {
                <$value_type>::from_bits(self.inner.load(ORDER))
            }

            /// Stores a new value, overwriting the previous one.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to store.
            #[inline]
            pub fn store(&self, value: $value_type) {
                self.inner.store(value.to_bits(), ORDER);
            }

            /// Swaps the current value with a new value, returning the old
            /// value.
            ///
            /// Each previous value is observed by exactly one swapper.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to swap in.
            ///
            /// # Returns
            ///
            /// The old value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::default();")]
            /// assert_eq!(atomic.swap(1.25), 0.0);
            /// assert_eq!(atomic.swap(2.5), 1.25);
            /// assert_eq!(atomic.load(), 2.5);
            /// ```
            #[inline]
            pub fn swap(&self, value: $value_type) -> $value_type {
                <$value_type>::from_bits(self.inner.swap(value.to_bits(), ORDER))
            }

            /// Replaces the value with `desired` if the stored bits equal
            /// the bits of `expected`.
            ///
            /// The comparison is bit equality, not float equality: `+0.0`
            /// and `-0.0` do not match each other, while a NaN matches a
            /// stored NaN carrying the identical payload.
            ///
            /// # Parameters
            ///
            /// * `expected` - The value whose bit pattern must be stored.
            /// * `desired` - The value to store on a match.
            ///
            /// # Returns
            ///
            /// `true` if the value was replaced, `false` if the cell was left
            /// unchanged.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(-0.0);")]
            /// assert!(!atomic.compare_and_swap(0.0, 1.0));
            /// assert!(atomic.compare_and_swap(-0.0, 1.0));
            /// ```
            #[inline]
            pub fn compare_and_swap(&self, expected: $value_type, desired: $value_type) -> bool {
                self.compare_set(expected, desired).is_ok()
            }

            /// Compares and sets the value atomically.
            ///
            /// If the stored bits equal the bits of `current`, stores `new`
            /// and returns `Ok(())`. Otherwise returns `Err(actual)` with the
            /// value that was observed instead.
            ///
            /// # Parameters
            ///
            /// * `current` - The expected current value.
            /// * `new` - The new value to set if current matches.
            ///
            /// # Returns
            ///
            /// `Ok(())` on success, or `Err(actual)` on failure.
            #[inline]
            pub fn compare_set(&self, current: $value_type, new: $value_type) -> Result<(), $value_type> {
                self.inner
                    .compare_exchange(current.to_bits(), new.to_bits(), ORDER, ORDER)
                    .map(|_| ())
                    .map_err(<$value_type>::from_bits)
            }

            /// Weak version of compare-and-set.
            ///
            /// May spuriously fail even when the bits match. Should be used
            /// in a loop.
            ///
            /// # Parameters
            ///
            /// * `current` - The expected current value.
            /// * `new` - The new value to set if current matches.
            ///
            /// # Returns
            ///
            /// `Ok(())` on success, or `Err(actual)` on failure.
            #[inline]
            pub fn compare_set_weak(&self, current: $value_type, new: $value_type) -> Result<(), $value_type> {
                self.inner
                    .compare_exchange_weak(current.to_bits(), new.to_bits(), ORDER, ORDER)
                    .map(|_| ())
                    .map_err(<$value_type>::from_bits)
            }

            /// Compares and exchanges the value atomically, returning the
            /// value observed before the operation.
            ///
            /// The operation succeeded iff the returned value has the same
            /// bits as `current`.
            ///
            /// # Parameters
            ///
            /// * `current` - The expected current value.
            /// * `new` - The new value to set if current matches.
            ///
            /// # Returns
            ///
            /// The value before the operation.
            #[inline]
            pub fn compare_and_exchange(&self, current: $value_type, new: $value_type) -> $value_type {
                let (Ok(bits) | Err(bits)) =
                    self.inner.compare_exchange(current.to_bits(), new.to_bits(), ORDER, ORDER);
                <$value_type>::from_bits(bits)
            }

            // Read-compute-CAS loop shared by every arithmetic operation.
            // Returns (old, new). The CAS compares bits, so a transform that
            // leaves the bits unchanged still commits on the first attempt.
            #[inline]
            fn update_with<F>(&self, mut f: F) -> ($value_type, $value_type)
            where
                F: FnMut($value_type) -> $value_type,
            {
                let mut current = self.inner.load(ORDER);
                loop {
                    let new = f(<$value_type>::from_bits(current)).to_bits();
                    match self.inner.compare_exchange(current, new, ORDER, ORDER) {
                        Ok(_) => {
                            return (
                                <$value_type>::from_bits(current),
                                <$value_type>::from_bits(new),
                            )
                        }
                        Err(actual) => {
                            current = actual;
                            contended(stringify!($name));
                        }
                    }
                }
            }

            /// Atomically adds a value, returning the new value.
            ///
            /// There is no hardware float add, so this loads the value,
            /// computes the sum with ordinary IEEE-754 arithmetic and
            /// commits it with a compare-and-swap, retrying with the freshly
            /// observed value whenever another thread got there first. The
            /// loop is lock-free: it never blocks or allocates, but may spin
            /// under contention.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to add.
            ///
            /// # Returns
            ///
            /// The new value after adding.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::default();")]
            /// assert_eq!(atomic.add(1.25), 1.25);
            /// assert_eq!(atomic.add(2.25), 3.5);
            /// ```
            #[inline]
            pub fn add(&self, delta: $value_type) -> $value_type {
                self.update_with(|current| current + delta).1
            }

            /// Atomically subtracts a value, returning the new value.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to subtract.
            ///
            /// # Returns
            ///
            /// The new value after subtracting.
            #[inline]
            pub fn sub(&self, delta: $value_type) -> $value_type {
                self.update_with(|current| current - delta).1
            }

            /// Atomically adds a value, returning the old value.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to add.
            ///
            /// # Returns
            ///
            /// The old value before adding.
            #[inline]
            pub fn fetch_add(&self, delta: $value_type) -> $value_type {
                self.update_with(|current| current + delta).0
            }

            /// Atomically subtracts a value, returning the old value.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to subtract.
            ///
            /// # Returns
            ///
            /// The old value before subtracting.
            #[inline]
            pub fn fetch_sub(&self, delta: $value_type) -> $value_type {
                self.update_with(|current| current - delta).0
            }

            /// Stores the maximum of the current value and `value`,
            /// returning the old value.
            ///
            /// Follows `max` semantics: a NaN operand is ignored in favour
            /// of the other one.
            ///
            /// # Parameters
            ///
            /// * `value` - The value to compare with.
            ///
            /// # Returns
            ///
            /// The old value.
            #[inline]
            pub fn fetch_max(&self, value: $value_type) -> $value_type {
                self.update_with(|current| current.max(value)).0
            }

            /// Stores the minimum of the current value and `value`,
            /// returning the old value.
            ///
            /// Follows `min` semantics: a NaN operand is ignored in favour
            /// of the other one.
            ///
            /// # Parameters
            ///
            /// * `value` - The value to compare with.
            ///
            /// # Returns
            ///
            /// The old value.
            #[inline]
            pub fn fetch_min(&self, value: $value_type) -> $value_type {
                self.update_with(|current| current.min(value)).0
            }

            /// Updates the value using a function, returning the old value.
            ///
            /// `f` may be called several times when other threads race the
            /// update, so it should be free of side effects.
            ///
            /// # Parameters
            ///
            /// * `f` - A function that takes the current value and returns
            ///   the new value.
            ///
            /// # Returns
            ///
            /// The old value before the update.
            #[inline]
            pub fn fetch_update<F>(&self, f: F) -> $value_type
            where
                F: FnMut($value_type) -> $value_type,
            {
                self.update_with(f).0
            }

            /// Updates the value using a function, returning the new value.
            ///
            /// # Parameters
            ///
            /// * `f` - A function that takes the current value and returns
            ///   the new value.
            ///
            /// # Returns
            ///
            /// The new value after the update.
            #[inline]
            pub fn update_and_get<F>(&self, f: F) -> $value_type
            where
                F: FnMut($value_type) -> $value_type,
            {
                self.update_with(f).1
            }

            /// Consumes the atomic and returns the contained value.
            ///
            /// Owning `self` proves no other thread can still observe the
            /// cell, so no atomic instruction is needed.
            #[cfg(not(feature = "loom"))]
            #[inline]
            pub fn into_inner(self) -> $value_type {
                <$value_type>::from_bits(self.inner.into_inner())
            }

            /// Gets a reference to the underlying bit atomic.
            ///
            /// Use `to_bits()`/`from_bits()` when going through it directly.
            ///
            /// # Returns
            ///
            /// A reference to the integer atomic holding the bit pattern.
            #[inline]
            pub fn inner(&self) -> &$bits_type {
                &self.inner
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

            #[inline]
            fn fetch_update<F>(&self, f: F) -> $value_type
            where
                F: FnMut($value_type) -> $value_type,
            {
                self.fetch_update(f)
            }

            #[inline]
            fn update_and_get<F>(&self, f: F) -> $value_type
            where
                F: FnMut($value_type) -> $value_type,
            {
                self.update_and_get(f)
            }
        }

        impl AtomicFloat for $name {
            #[inline]
            fn add(&self, delta: $value_type) -> $value_type {
                self.add(delta)
            }

            #[inline]
            fn sub(&self, delta: $value_type) -> $value_type {
                self.sub(delta)
            }

            #[inline]
            fn fetch_add(&self, delta: $value_type) -> $value_type {
                self.fetch_add(delta)
            }

            #[inline]
            fn fetch_sub(&self, delta: $value_type) -> $value_type {
                self.fetch_sub(delta)
            }

            #[inline]
            fn fetch_max(&self, value: $value_type) -> $value_type {
                self.fetch_max(value)
            }

            #[inline]
            fn fetch_min(&self, value: $value_type) -> $value_type {
                self.fetch_min(value)
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0.0)
            }
        }

        impl From<$value_type> for $name {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.load())
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.load())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.load(), serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <$value_type as serde::Deserialize>::deserialize(deserializer).map(Self::new)
            }
        }
    };
}

pub(crate) use impl_atomic_float;
