//! Saturating multiplication
//!
//! Products are formed exactly on a 64-bit magnitude, then clamped to the
//! result type. The two `mul_wide_*` helpers return the exact 64-bit
//! product and never saturate; the multiply-divide kernel is built on them.

use super::wide::{Operand, Saturate, Wide};

/// Multiply two 16/32-bit operands into a saturated 16/32/64-bit result
///
/// For unsigned results a negative product short-circuits to `0` before
/// multiplying.
///
/// # Example
/// ```
/// use clepsydra_core::arith::mul;
/// let p: i16 = mul(300i32, 300i32);
/// assert_eq!(p, i16::MAX);
///
/// let p: u32 = mul(u32::MAX, -1i32);
/// assert_eq!(p, 0);
/// ```
#[inline]
pub fn mul<R: Saturate>(x: impl Operand, y: impl Operand) -> R {
    let negative = x.is_negative() != y.is_negative();
    if negative && !R::SIGNED {
        return R::LOWER;
    }

    let product = u64::from(x.magnitude()) * u64::from(y.magnitude());
    R::saturate(Wide::new(negative, product))
}

/// Exact signed 32×32→64 product
#[inline]
pub const fn mul_wide_i32(x: i32, y: i32) -> i64 {
    x as i64 * y as i64
}

/// Exact unsigned 32×32→64 product
#[inline]
pub const fn mul_wide_u32(x: u32, y: u32) -> u64 {
    x as u64 * y as u64
}
