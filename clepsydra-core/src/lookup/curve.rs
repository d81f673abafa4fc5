//! 1-D curve interpolation
//!
//! ```text
//!                 (y1 - y0) * (x - x0)
//!  result = y0 + ----------------------
//!                       (x1 - x0)
//! ```
//!
//! The fraction goes through [`mul_div`], so the product never overflows.

use super::error::TableError;
use super::search::{split_count, widen, Bracket, Distribution, Knot};
use crate::arith::{mul_div, Saturate, Wide};

/// Validated curve borrowing its X and Y points
///
/// # Example
/// ```
/// use clepsydra_core::lookup::Curve;
/// // Pump duty (%) over flow setpoint (ml/min)
/// const FLOW: [i16; 3] = [0, 10, 20];
/// const DUTY: [i16; 3] = [0, 100, 300];
/// let curve = Curve::new(&FLOW, &DUTY).unwrap();
/// assert_eq!(curve.interpolate(5), 50);
/// assert_eq!(curve.interpolate(25), 300);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Curve<'a, T> {
    x: Distribution<'a, T>,
    y: &'a [T],
}

impl<'a, T: Knot> Curve<'a, T> {
    /// Pair an X distribution with the same number of Y values
    ///
    /// For `i32` curves, neighbouring X and Y points must differ by no more
    /// than `i32::MAX` so the interpolation fraction stays in 32 bits.
    pub fn new(x: &'a [T], y: &'a [T]) -> Result<Self, TableError> {
        let x = Distribution::new(x)?;
        if y.len() != x.len() {
            return Err(TableError::LengthMismatch);
        }
        if !fits_i32(x.points()) || !fits_i32(y) {
            return Err(TableError::SpanOverflow);
        }
        Ok(Self { x, y })
    }

    /// Wrap a packed `[count, x0 .. xN-1, y0 .. yN-1]` slice
    pub fn from_packed(packed: &'a [T]) -> Result<Self, TableError> {
        let (count, data) = split_count(packed)?;
        if count.checked_mul(2) != Some(data.len()) {
            return Err(TableError::LengthMismatch);
        }
        let (x, y) = data.split_at(count);
        Self::new(x, y)
    }

    /// Build from parts already validated by the caller
    pub(crate) fn from_validated(x: Distribution<'a, T>, y: &'a [T]) -> Self {
        Self { x, y }
    }

    /// X distribution
    pub fn x(&self) -> &Distribution<'a, T> {
        &self.x
    }

    /// Y values
    pub fn y(&self) -> &'a [T] {
        self.y
    }

    /// Interpolate the curve at `x`
    ///
    /// Below the first point returns the first Y, above the last point the
    /// last Y. Exact at every knot.
    pub fn interpolate(&self, x: i32) -> T {
        match self.x.bracket(x) {
            Bracket::Below => self.y[0],
            Bracket::Above => self.y[self.y.len() - 1],
            Bracket::Between(i) => {
                let x0 = widen(self.x.points()[i]);
                let x1 = widen(self.x.points()[i + 1]);
                let y0 = widen(self.y[i]);
                let y1 = widen(self.y[i + 1]);

                let step: i32 = mul_div(
                    narrow(y1 - y0),
                    narrow(i64::from(x) - x0),
                    narrow(x1 - x0),
                );

                // |step| <= |y1 - y0|, so the sum stays between y0 and y1
                T::saturate(Wide::from_i64(y0 + i64::from(step)))
            }
        }
    }
}

/// Every neighbour difference fits `i32`
fn fits_i32<T: Knot>(points: &[T]) -> bool {
    points.windows(2).all(|pair| {
        let delta = widen(pair[1]) - widen(pair[0]);
        i32::try_from(delta).is_ok()
    })
}

#[inline]
fn narrow(value: i64) -> i32 {
    i32::saturate(Wide::from_i64(value))
}
