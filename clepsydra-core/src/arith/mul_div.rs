//! Combined multiply-divide
//!
//! `(x * y) / z` with the product held exactly in 64 bits, so the multiply
//! cannot overflow even when the final quotient fits comfortably in 32
//! bits. The quotient follows the division rules of [`super::div`], then
//! narrows through [`limit`].

use super::div::{div_i64_i32, div_u64_u32};
use super::limit::limit;
use super::mul::{mul_wide_i32, mul_wide_u32};
use super::wide::Saturate;

/// Signed `(x * y) / z` clamped into `R` (`i16`, `u16` or `i32`)
///
/// A zero divisor saturates by the sign of `x * y`.
///
/// # Example
/// ```
/// use clepsydra_core::arith::mul_div;
/// let v: i32 = mul_div(100_000, 100_000, 1_000_000);
/// assert_eq!(v, 10_000);
/// let v: i16 = mul_div(-100_000, 100_000, 3);
/// assert_eq!(v, i16::MIN);
/// ```
#[inline]
pub fn mul_div<R: Saturate>(x: i32, y: i32, z: i32) -> R {
    limit(div_i64_i32(mul_wide_i32(x, y), z))
}

/// Unsigned `(x * y) / z` clamped into `R` (`u16` or `u32`)
///
/// Uses the long-division kernel, so `0 * y / 0` yields `1`.
#[inline]
pub fn mul_div_unsigned<R: Saturate>(x: u32, y: u32, z: u32) -> R {
    limit(div_u64_u32(mul_wide_u32(x, y), z))
}
