//! Driver errors

use embedded_hal::digital::{Error, ErrorKind};

/// Errors that can occur while driving a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<E> {
    /// The underlying pin reported an error
    Pin(E),
}

impl<E: Error> Error for DriverError<E> {
    fn kind(&self) -> ErrorKind {
        match self {
            DriverError::Pin(e) => e.kind(),
        }
    }
}

impl<E> From<E> for DriverError<E> {
    fn from(e: E) -> Self {
        DriverError::Pin(e)
    }
}
