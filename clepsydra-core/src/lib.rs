//! Board-agnostic control kernel for the Clepsydra firmware
//!
//! This crate contains the integer-only math every control loop relies on.
//! Nothing in here touches hardware; drivers and tasks call into it with
//! plain numbers and caller-owned state structs:
//!
//! - Saturating division, multiplication and multiply-divide
//! - Distribution search, curve and map interpolation
//! - Sliding average and debounce filters
//! - Software timers over an injected clock
//! - CRC-8 and two's complement checksums
//! - Calibration table storage
//!
//! Every arithmetic operation is total: overflow, underflow and zero
//! divisors produce a defined saturation value instead of a panic.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod arith;
pub mod checksum;
pub mod config;
pub mod filter;
pub mod lookup;
pub mod timer;
pub mod traits;

pub use arith::{div, div_i64_i32, div_u64_u32, limit, mul, mul_div, mul_div_unsigned};
pub use checksum::crc8;
pub use lookup::{Curve, Distribution, Map, SearchResult, TableError};
