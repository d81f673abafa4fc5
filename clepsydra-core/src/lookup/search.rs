//! Distribution search
//!
//! Locates the interval of a sorted distribution that brackets a query and
//! expresses the position inside it as a 15-bit fixed-point ratio.

use super::error::TableError;
use crate::arith::{div_u64_u32, Saturate};

/// Maximum number of points in a distribution (index must fit 16 bits)
pub const MAX_POINTS: usize = 1 << 16;

/// Number of fractional bits in a search ratio
pub const RATIO_BITS: u32 = 15;

/// Ratio value representing 1.0 (never produced by a search)
pub const RATIO_ONE: i32 = 1 << RATIO_BITS;

/// Element types a distribution, curve or map can be built from
pub trait Knot: Copy + Ord + Saturate + Into<i64> {}

impl Knot for i16 {}
impl Knot for i32 {}

#[inline]
pub(crate) fn widen<T: Knot>(value: T) -> i64 {
    value.into()
}

/// Split the leading element count off a packed table
pub(crate) fn split_count<T: Knot>(packed: &[T]) -> Result<(usize, &[T]), TableError> {
    let (&count, rest) = packed.split_first().ok_or(TableError::TooShort)?;
    let count = usize::try_from(widen(count)).map_err(|_| TableError::LengthMismatch)?;
    Ok((count, rest))
}

/// Packed search result: index in the upper 16 bits, ratio in the lower 16
///
/// The ratio is the query's position between `d[index]` and
/// `d[index + 1]`, scaled to `[0, 32768)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SearchResult(u32);

impl SearchResult {
    /// Pack an index and ratio
    #[inline]
    pub const fn new(index: u16, ratio: u16) -> Self {
        Self(((index as u32) << 16) | ratio as u32)
    }

    /// Rebuild from the packed 32-bit form
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Packed 32-bit form
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index of the left bracketing point
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 >> 16) as usize
    }

    /// Position between the bracketing points, `0..32768`
    #[inline]
    pub const fn ratio(self) -> u16 {
        self.0 as u16
    }
}

/// Where a query falls relative to a distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bracket {
    /// At or before the first point
    Below,
    /// At or after the last point
    Above,
    /// `d[i] <= x < d[i + 1]`
    Between(usize),
}

/// Validated, borrowed, non-decreasing sequence of at least two points
#[derive(Debug, Clone, Copy)]
pub struct Distribution<'a, T> {
    points: &'a [T],
}

impl<'a, T: Knot> Distribution<'a, T> {
    /// Wrap a slice of points
    ///
    /// Rejects fewer than two points and any decreasing neighbour pair.
    /// Repeated points are allowed; a query landing on them brackets to
    /// the last of the run.
    pub fn new(points: &'a [T]) -> Result<Self, TableError> {
        if points.len() < 2 {
            return Err(TableError::TooShort);
        }
        if points.len() > MAX_POINTS {
            return Err(TableError::Capacity);
        }
        if points.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(TableError::NotMonotonic);
        }
        Ok(Self { points })
    }

    /// Wrap a packed `[count, d0 .. dN-1]` slice
    pub fn from_packed(packed: &'a [T]) -> Result<Self, TableError> {
        let (count, points) = split_count(packed)?;
        if points.len() != count {
            return Err(TableError::LengthMismatch);
        }
        Self::new(points)
    }

    /// Wrap points the caller has already validated
    pub(crate) fn from_validated(points: &'a [T]) -> Self {
        Self { points }
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a distribution holds at least two points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrowed points
    #[inline]
    pub fn points(&self) -> &'a [T] {
        self.points
    }

    /// Classify a query against the distribution
    ///
    /// Uses a binary search; for non-decreasing data this finds the same
    /// interval as scanning backward from the last point.
    pub fn bracket(&self, x: i32) -> Bracket {
        let x = i64::from(x);
        let last = self.points.len() - 1;

        if x <= widen(self.points[0]) {
            return Bracket::Below;
        }
        if x >= widen(self.points[last]) {
            return Bracket::Above;
        }

        // d[0] < x < d[last], so the split lands in 1..=last
        let upper = self.points.partition_point(|&p| widen(p) <= x);
        Bracket::Between(upper - 1)
    }

    /// Find the bracketing index and ratio for `x`
    ///
    /// # Example
    /// ```
    /// use clepsydra_core::lookup::Distribution;
    /// let d = Distribution::new(&[0i16, 10, 20]).unwrap();
    /// let r = d.search(15);
    /// assert_eq!(r.index(), 1);
    /// assert_eq!(r.ratio(), 16_384);
    /// ```
    pub fn search(&self, x: i32) -> SearchResult {
        match self.bracket(x) {
            Bracket::Below => SearchResult::new(0, 0),
            Bracket::Above => SearchResult::new((self.points.len() - 1) as u16, 0),
            Bracket::Between(index) => {
                let left = widen(self.points[index]);
                let right = widen(self.points[index + 1]);

                // 0 <= offset < span <= u32::MAX
                let offset = (i64::from(x) - left) as u64;
                let span = (right - left) as u32;
                let ratio = div_u64_u32(offset << RATIO_BITS, span);

                SearchResult::new(index as u16, ratio as u16)
            }
        }
    }
}
