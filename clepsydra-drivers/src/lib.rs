//! Pin-level drivers built on the Clepsydra kernel
//!
//! Both drivers are generic over `embedded-hal` 1.0 digital pins, so any
//! HAL (or a test double) can back them:
//!
//! - Debounced switch input (door or light-barrier switch)
//! - Blinking indicator LED

#![no_std]
#![deny(unsafe_code)]

pub mod error;
pub mod led;
pub mod switch;

pub use error::DriverError;
pub use led::BlinkLed;
pub use switch::{DebouncedSwitch, SwitchConfig};
