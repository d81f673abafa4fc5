//! 2-D map interpolation
//!
//! Both axes are searched independently, then the four surrounding Z
//! values are blended: along Y first, then along X between the two
//! Y-blended rows.

use super::error::TableError;
use super::search::{split_count, Distribution, SearchResult, RATIO_BITS, RATIO_ONE};

/// Validated map over `i16` axes and values
#[derive(Debug, Clone, Copy)]
pub struct Map<'a> {
    x: Distribution<'a, i16>,
    y: Distribution<'a, i16>,
    z: &'a [i16],
}

impl<'a> Map<'a> {
    /// Build from both axes and a row-major `x.len() * y.len()` grid
    pub fn new(x: &'a [i16], y: &'a [i16], z: &'a [i16]) -> Result<Self, TableError> {
        let x = Distribution::new(x)?;
        let y = Distribution::new(y)?;
        if x.len().checked_mul(y.len()) != Some(z.len()) {
            return Err(TableError::LengthMismatch);
        }
        Ok(Self { x, y, z })
    }

    /// Wrap a packed `[Nx, Ny, x.., y.., z..]` slice
    ///
    /// # Example
    /// ```
    /// use clepsydra_core::lookup::Map;
    /// // Valve opening over (pressure, temperature)
    /// const VALVE: [i16; 13] = [
    ///     2, 3,
    ///     0, 100,
    ///     0, 10, 20,
    ///     0, 10, 20,
    ///     100, 110, 120,
    /// ];
    /// let map = Map::from_packed(&VALVE).unwrap();
    /// assert_eq!(map.interpolate(50, 5), 55);
    /// ```
    pub fn from_packed(packed: &'a [i16]) -> Result<Self, TableError> {
        let (nx, rest) = split_count(packed)?;
        let (ny, data) = split_count(rest)?;
        let cells = nx.checked_mul(ny).ok_or(TableError::LengthMismatch)?;
        if nx + ny + cells != data.len() {
            return Err(TableError::LengthMismatch);
        }
        let (x, data) = data.split_at(nx);
        let (y, z) = data.split_at(ny);
        Self::new(x, y, z)
    }

    pub(crate) fn from_validated(
        x: Distribution<'a, i16>,
        y: Distribution<'a, i16>,
        z: &'a [i16],
    ) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> &Distribution<'a, i16> {
        &self.x
    }

    pub fn y(&self) -> &Distribution<'a, i16> {
        &self.y
    }

    pub fn z(&self) -> &'a [i16] {
        self.z
    }

    /// Search both axes and blend
    pub fn interpolate(&self, x: i32, y: i32) -> i16 {
        self.interpolate_searched(self.x.search(x), self.y.search(y))
    }

    /// Blend using precomputed search results
    ///
    /// Lets several maps sharing an axis reuse one search. Results from a
    /// different distribution are clamped into this grid rather than
    /// indexing out of bounds.
    pub fn interpolate_searched(&self, xs: SearchResult, ys: SearchResult) -> i16 {
        let (ix, rx) = clamp(xs, self.x.len());
        let (iy, ry) = clamp(ys, self.y.len());
        let ny = self.y.len();

        let row = ix * ny + iy;
        let mut z0 = self.blend_row(row, ry);
        if rx != 0 {
            let z1 = self.blend_row(row + ny, ry);
            z0 += blend(z0, z1, rx);
        }
        // Blends stay between their endpoints
        z0 as i16
    }

    fn blend_row(&self, cell: usize, ry: i32) -> i32 {
        let z0 = i32::from(self.z[cell]);
        if ry == 0 {
            return z0;
        }
        z0 + blend(z0, i32::from(self.z[cell + 1]), ry)
    }
}

/// Fractional step from `a` toward `b`, truncated toward zero
#[inline]
fn blend(a: i32, b: i32, ratio: i32) -> i32 {
    // |b - a| <= 65535 and ratio < 2^15: the product fits 31 bits
    ((b - a) * ratio) / (1 << RATIO_BITS)
}

/// Index inside the axis, ratio zero on the last point
fn clamp(result: SearchResult, len: usize) -> (usize, i32) {
    let last = len - 1;
    let index = result.index();
    if index >= last {
        (last, 0)
    } else {
        (index, i32::from(result.ratio()).min(RATIO_ONE - 1))
    }
}
