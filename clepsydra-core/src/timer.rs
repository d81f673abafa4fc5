//! Software timers
//!
//! A timer is just the clock value captured at start. Zero is reserved as
//! the stopped marker, so a timer started exactly at clock value zero
//! reads as stopped.

use crate::arith::mul_div_unsigned;
use crate::traits::Clock;

/// Start-stamp software timer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SoftwareTimer {
    started_at: u32,
}

impl SoftwareTimer {
    /// Stopped timer
    pub const fn new() -> Self {
        Self { started_at: 0 }
    }

    /// Capture the current clock value
    pub fn start(&mut self, clock: &impl Clock) {
        self.started_at = clock.now_ms();
    }

    /// Milliseconds since [`start`](Self::start), across counter wraparound
    ///
    /// # Example
    /// ```
    /// use clepsydra_core::timer::SoftwareTimer;
    /// use clepsydra_core::traits::Clock;
    ///
    /// struct Fixed(u32);
    /// impl Clock for Fixed {
    ///     fn now_ms(&self) -> u32 { self.0 }
    /// }
    ///
    /// let mut timer = SoftwareTimer::new();
    /// timer.start(&Fixed(u32::MAX - 9));
    /// assert_eq!(timer.elapsed(&Fixed(10)), 20);
    /// ```
    pub fn elapsed(&self, clock: &impl Clock) -> u32 {
        clock.now_ms().wrapping_sub(self.started_at)
    }

    /// `true` once at least `period_ms` have passed since start
    pub fn has_elapsed(&self, clock: &impl Clock, period_ms: u32) -> bool {
        self.elapsed(clock) >= period_ms
    }

    pub fn is_stopped(&self) -> bool {
        self.started_at == 0
    }

    pub fn stop(&mut self) {
        self.started_at = 0;
    }

    /// Raw start stamp
    pub fn started_at(&self) -> u32 {
        self.started_at
    }
}

/// Convert milliseconds to ticks of a `tick_hz` clock, saturating
#[inline]
pub fn ms_to_ticks(ms: u32, tick_hz: u32) -> u32 {
    mul_div_unsigned(ms, tick_hz, 1000)
}

/// Convert ticks of a `tick_hz` clock to milliseconds, saturating
///
/// A zero tick rate saturates to `u32::MAX` (or `1` for zero ticks).
#[inline]
pub fn ticks_to_ms(ticks: u32, tick_hz: u32) -> u32 {
    mul_div_unsigned(ticks, 1000, tick_hz)
}
