//! Piecewise-linear lookup tables
//!
//! Tables borrow caller-owned slices (typically `const` arrays in flash)
//! and are validated once at construction. After that every lookup is
//! total: queries outside the table clamp to the edge values.
//!
//! Two storage layouts are accepted:
//!
//! ```text
//! curve, split:   x: [x0 .. xN-1]   y: [y0 .. yN-1]
//! curve, packed:  [N, x0 .. xN-1, y0 .. yN-1]
//! map, packed:    [Nx, Ny, x0 .. xNx-1, y0 .. yNy-1, z(0,0) .. z(Nx-1,Ny-1)]
//! ```
//!
//! Map Z values are row-major over X then Y: `z[ix * Ny + iy]`.

pub mod curve;
pub mod error;
pub mod map;
pub mod search;

pub use curve::Curve;
pub use error::TableError;
pub use map::Map;
pub use search::{Bracket, Distribution, Knot, SearchResult};
