//! Type limiters and range clamps

use super::wide::{Operand, Saturate};

/// Narrow a value into another integer type, clamping at its bounds
///
/// # Example
/// ```
/// use clepsydra_core::arith::limit;
/// let v: i16 = limit(40_000i32);
/// assert_eq!(v, i16::MAX);
/// let v: u16 = limit(-3i32);
/// assert_eq!(v, 0);
/// ```
#[inline]
pub fn limit<R: Saturate>(x: impl Operand) -> R {
    R::saturate(x.to_wide())
}

/// Clamp `x` to `[min, max]`
///
/// Unlike [`Ord::clamp`] this never panics: the upper bound is applied
/// first, so an inverted range (`min > max`) yields `min`.
#[inline]
pub fn limit_range<T: PartialOrd + Copy>(x: T, min: T, max: T) -> T {
    let upper = if x > max { max } else { x };
    if upper < min {
        min
    } else {
        upper
    }
}

/// Absolute value with `i32::MIN` saturating to `i32::MAX`
#[inline]
pub const fn abs_i32(x: i32) -> i32 {
    if x == i32::MIN {
        i32::MAX
    } else {
        x.abs()
    }
}
