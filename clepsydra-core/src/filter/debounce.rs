//! Asymmetric time-based debounce
//!
//! A raw boolean input is only accepted once it has differed from the
//! accepted state for the settle time of that transition direction.

/// Settle times per transition direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebounceParams {
    /// Time the input must stay low before a high to low change (ms)
    pub high_to_low_ms: u16,
    /// Time the input must stay high before a low to high change (ms)
    pub low_to_high_ms: u16,
}

impl DebounceParams {
    pub const fn new(high_to_low_ms: u16, low_to_high_ms: u16) -> Self {
        Self {
            high_to_low_ms,
            low_to_high_ms,
        }
    }

    /// Settle time for a change towards `target`
    #[inline]
    pub const fn settle_ms(&self, target: bool) -> u32 {
        if target {
            self.low_to_high_ms as u32
        } else {
            self.high_to_low_ms as u32
        }
    }
}

/// Debounce state: the accepted value and the time spent disagreeing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debounce {
    accepted: bool,
    pending_ms: u32,
}

impl Debounce {
    /// Start from a known accepted state
    pub const fn new(initial: bool) -> Self {
        Self {
            accepted: initial,
            pending_ms: 0,
        }
    }

    /// Feed one raw sample taken `elapsed_ms` after the previous one
    ///
    /// Returns the accepted value. A raw value matching the accepted one
    /// clears the pending time; otherwise the elapsed time accumulates and
    /// the raw value is accepted once the total reaches the settle time.
    ///
    /// The sample's own `elapsed_ms` counts before the comparison: with a
    /// 10 ms settle time sampled every 1 ms, the 10th disagreeing sample is
    /// accepted, not the 11th.
    ///
    /// # Example
    /// ```
    /// use clepsydra_core::filter::{Debounce, DebounceParams};
    /// let params = DebounceParams::new(200, 10);
    /// let mut d = Debounce::new(false);
    /// assert!(!d.update(true, &params, 5));
    /// assert!(d.update(true, &params, 5));
    /// ```
    pub fn update(&mut self, raw: bool, params: &DebounceParams, elapsed_ms: u32) -> bool {
        if raw == self.accepted {
            self.pending_ms = 0;
            return self.accepted;
        }

        self.pending_ms = self.pending_ms.saturating_add(elapsed_ms);
        if self.pending_ms >= params.settle_ms(raw) {
            self.accepted = raw;
            self.pending_ms = 0;
        }
        self.accepted
    }

    /// Currently accepted value
    #[inline]
    pub fn state(&self) -> bool {
        self.accepted
    }

    /// Time the raw input has disagreed with the accepted value (ms)
    #[inline]
    pub fn pending_ms(&self) -> u32 {
        self.pending_ms
    }
}
