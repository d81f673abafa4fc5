//! Blinking indicator LED
//!
//! Toggles an output every half period using a software timer, so the
//! blink rate is independent of how often the control loop calls in.

use clepsydra_core::timer::SoftwareTimer;
use clepsydra_core::traits::Clock;
use embedded_hal::digital::OutputPin;

use crate::error::DriverError;

/// LED on a GPIO, active-high
pub struct BlinkLed<P, C> {
    pin: P,
    clock: C,
    timer: SoftwareTimer,
    lit: bool,
}

impl<P: OutputPin, C: Clock> BlinkLed<P, C> {
    /// Wrap a pin; the LED state is unknown until the first write
    pub fn new(pin: P, clock: C) -> Self {
        Self {
            pin,
            clock,
            timer: SoftwareTimer::new(),
            lit: false,
        }
    }

    /// Advance the blink pattern
    ///
    /// Call periodically. The first call (or the first after [`set`])
    /// only arms the timer. Afterwards the LED toggles each time more
    /// than `half_period_ms` has passed since the last toggle.
    ///
    /// [`set`]: Self::set
    pub fn blink(&mut self, half_period_ms: u32) -> Result<(), DriverError<P::Error>> {
        if self.timer.is_stopped() {
            self.timer.start(&self.clock);
        } else if self.timer.elapsed(&self.clock) > half_period_ms {
            self.write(!self.lit)?;
            self.timer.start(&self.clock);
        }
        Ok(())
    }

    /// Drive the LED to a fixed state and stop blinking
    pub fn set(&mut self, on: bool) -> Result<(), DriverError<P::Error>> {
        self.timer.stop();
        self.write(on)
    }

    /// Last state written to the pin
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Give the pin and clock back
    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }

    fn write(&mut self, on: bool) -> Result<(), DriverError<P::Error>> {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("led: pin write failed");
            DriverError::Pin(e)
        })?;
        self.lit = on;
        Ok(())
    }
}
