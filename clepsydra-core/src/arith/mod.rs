//! Saturating integer arithmetic
//!
//! All operations clamp into the result type instead of wrapping or
//! trapping. Results are selected by type inference:
//!
//! ```
//! use clepsydra_core::arith::div;
//! let q: i16 = div(100_000i32, 2i32);
//! assert_eq!(q, i16::MAX);
//! ```

pub mod div;
pub mod limit;
pub mod mul;
pub mod mul_div;
mod wide;

pub use div::{div, div_i64_i32, div_u64_u32};
pub use limit::{abs_i32, limit, limit_range};
pub use mul::{mul, mul_wide_i32, mul_wide_u32};
pub use mul_div::{mul_div, mul_div_unsigned};
pub use wide::{Operand, Saturate, Wide};
