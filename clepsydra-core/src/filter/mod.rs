//! Signal conditioning
//!
//! Caller-owned filter state, advanced one sample at a time from the
//! control loop.

pub mod average;
pub mod debounce;

pub use average::{average, average_pair, SlidingAverage};
pub use debounce::{Debounce, DebounceParams};
