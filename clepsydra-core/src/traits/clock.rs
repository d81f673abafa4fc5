//! Millisecond clock source

/// Free-running millisecond counter
///
/// The counter is expected to wrap at `u32::MAX` (about 49.7 days).
/// Consumers compute differences with wrapping arithmetic.
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
