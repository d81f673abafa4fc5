//! Platform abstraction traits
//!
//! The kernel never reads hardware directly. Time comes in through these
//! traits so the same code runs on target and in host tests.

pub mod clock;

pub use clock::Clock;
