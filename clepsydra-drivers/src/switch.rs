//! Debounced switch input
//!
//! Samples a digital input once per control-loop call and filters it with
//! asymmetric settle times. The defaults suit a door light-barrier: the
//! switch must read closed for 10 ms to be accepted, and open for 200 ms
//! before a closed door is considered open again.

use clepsydra_core::filter::{Debounce, DebounceParams};
use embedded_hal::digital::InputPin;

use crate::error::DriverError;

/// Switch timing and polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchConfig {
    /// Settle times for each transition direction
    pub debounce: DebounceParams,
    /// Time between [`DebouncedSwitch::poll`] calls (ms)
    pub sample_period_ms: u32,
    /// Switch reads active when the pin is low
    pub active_low: bool,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            debounce: DebounceParams::new(200, 10), // release 200 ms, press 10 ms
            sample_period_ms: 10,
            active_low: true,
        }
    }
}

/// Switch input with debounce
pub struct DebouncedSwitch<P> {
    pin: P,
    config: SwitchConfig,
    state: Debounce,
}

impl<P: InputPin> DebouncedSwitch<P> {
    /// Create a switch that starts out inactive
    pub fn new(pin: P, config: SwitchConfig) -> Self {
        Self {
            pin,
            config,
            state: Debounce::new(false),
        }
    }

    /// Sample the pin and advance the debounce filter by one period
    ///
    /// Returns the debounced state. On a pin error the filter is left
    /// untouched, so the last accepted state still holds.
    pub fn poll(&mut self) -> Result<bool, DriverError<P::Error>> {
        let high = match self.pin.is_high() {
            Ok(high) => high,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("switch: pin read failed, holding {}", self.state.state());
                return Err(DriverError::Pin(e));
            }
        };

        let raw = high != self.config.active_low;
        let previous = self.state.state();
        let active = self
            .state
            .update(raw, &self.config.debounce, self.config.sample_period_ms);

        if active != previous {
            #[cfg(feature = "defmt")]
            defmt::debug!("switch: {}", if active { "active" } else { "inactive" });
        }
        Ok(active)
    }

    /// Last debounced state, without sampling
    pub fn is_active(&self) -> bool {
        self.state.state()
    }

    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    /// Mock input whose level the test sets directly
    struct MockPin {
        high: bool,
        fail: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockError;

    impl Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    impl ErrorType for MockPin {
        type Error = MockError;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, MockError> {
            if self.fail {
                Err(MockError)
            } else {
                Ok(self.high)
            }
        }

        fn is_low(&mut self) -> Result<bool, MockError> {
            self.is_high().map(|h| !h)
        }
    }

    fn switch(high: bool) -> DebouncedSwitch<MockPin> {
        DebouncedSwitch::new(
            MockPin { high, fail: false },
            SwitchConfig::default(),
        )
    }

    fn poll_n(sw: &mut DebouncedSwitch<MockPin>, n: usize) -> bool {
        let mut active = sw.is_active();
        for _ in 0..n {
            active = sw.poll().unwrap();
        }
        active
    }

    #[test]
    fn test_press_accepted_after_one_period() {
        // Idle level is high for an active-low switch
        let mut sw = switch(true);
        assert!(!poll_n(&mut sw, 5));

        sw.pin.high = false;
        assert!(sw.poll().unwrap());
    }

    #[test]
    fn test_release_needs_200ms() {
        let mut sw = switch(false);
        assert!(sw.poll().unwrap());

        sw.pin.high = true;
        assert!(poll_n(&mut sw, 19));
        assert!(!sw.poll().unwrap());
    }

    #[test]
    fn test_bounce_during_release_restarts() {
        let mut sw = switch(false);
        sw.poll().unwrap();

        sw.pin.high = true;
        poll_n(&mut sw, 15);
        sw.pin.high = false;
        assert!(sw.poll().unwrap());
        sw.pin.high = true;
        assert!(poll_n(&mut sw, 19));
        assert!(!sw.poll().unwrap());
    }

    #[test]
    fn test_active_high_polarity() {
        let config = SwitchConfig {
            active_low: false,
            ..SwitchConfig::default()
        };
        let mut sw = DebouncedSwitch::new(MockPin { high: true, fail: false }, config);
        assert!(sw.poll().unwrap());
    }

    #[test]
    fn test_pin_error_holds_state() {
        let mut sw = switch(false);
        assert!(sw.poll().unwrap());

        sw.pin.fail = true;
        let err = sw.poll().unwrap_err();
        assert_eq!(err, DriverError::Pin(MockError));
        assert_eq!(err.kind(), ErrorKind::Other);
        assert!(sw.is_active());
    }

    struct AlwaysLow;

    impl ErrorType for AlwaysLow {
        type Error = Infallible;
    }

    impl InputPin for AlwaysLow {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(false)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(true)
        }
    }

    #[test]
    fn test_infallible_pin() {
        let mut sw = DebouncedSwitch::new(AlwaysLow, SwitchConfig::default());
        assert!(matches!(sw.poll(), Ok(true)));
        let _pin: AlwaysLow = sw.release();
    }
}
