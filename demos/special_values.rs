/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Special Values Example
//!
//! Shows that the cells keep IEEE-754 bit patterns exactly and compare by
//! bits: signed zero, infinities and NaN payloads.

use prism3_atomic_float::AtomicF64;

fn main() {
    println!("=== Special Values Example ===\n");

    // Example 1: Signed zero
    println!("1. Signed Zero:");
    let value = AtomicF64::new(-0.0);
    println!("   -0.0 == 0.0 as floats: {}", -0.0f64 == 0.0);
    println!("   CAS(0.0 -> 1.0) on -0.0: {}", value.compare_and_swap(0.0, 1.0));
    println!("   CAS(-0.0 -> 1.0) on -0.0: {}", value.compare_and_swap(-0.0, 1.0));

    // Example 2: NaN payloads
    println!("\n2. NaN Payloads:");
    let nan = f64::from_bits(f64::NAN.to_bits() | 0x2a);
    let value = AtomicF64::new(nan);
    println!("   Stored bits: {:#018x}", nan.to_bits());
    println!("   Loaded bits: {:#018x}", value.load().to_bits());
    println!("   NaN == NaN as floats: {}", nan == nan);
    println!("   CAS(same NaN -> 0.0): {}", value.compare_and_swap(nan, 0.0));

    // Example 3: Infinities
    println!("\n3. Infinities:");
    let value = AtomicF64::new(1.0);
    println!("   1.0 + inf = {}", value.add(f64::INFINITY));
    println!("   inf + -inf = {}", value.add(f64::NEG_INFINITY));

    // Example 4: Additions that do not change the value
    println!("\n4. Absorbed Additions:");
    let big = 9_007_199_254_740_992.0;
    let value = AtomicF64::new(big);
    println!("   {} + 1.0 = {}", big, value.add(1.0));
    println!("   Unchanged: {}", value.load() == big);

    println!("\n=== Example completed ===");
}
