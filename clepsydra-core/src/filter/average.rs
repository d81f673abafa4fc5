//! Moving and plain averages

/// Fixed-window moving average over `i16` samples
///
/// Keeps a running sum so each update costs one subtraction and one
/// addition regardless of the window size.
///
/// # Example
/// ```
/// use clepsydra_core::filter::SlidingAverage;
/// let mut avg = SlidingAverage::<4>::new();
/// for sample in [10, 20, 30] {
///     avg.push(sample);
/// }
/// assert_eq!(avg.push(40), 25);
/// ```
#[derive(Debug, Clone)]
pub struct SlidingAverage<const N: usize> {
    window: [i16; N],
    cursor: usize,
    sum: i32,
    filled: usize,
}

impl<const N: usize> SlidingAverage<N> {
    // N * i16::MIN must fit the i32 running sum
    const VALID_WINDOW: () = assert!(N > 0 && N <= u16::MAX as usize);

    /// Empty window, all slots zero
    pub const fn new() -> Self {
        let () = Self::VALID_WINDOW;
        Self {
            window: [0; N],
            cursor: 0,
            sum: 0,
            filled: 0,
        }
    }

    /// Replace the oldest slot and return the filtered value
    ///
    /// While `sample_count < max_sample_count` the raw sample is returned
    /// so the output tracks the input during start-up. After that the
    /// window mean is returned, truncated toward zero.
    pub fn update(&mut self, sample: i16, sample_count: i32, max_sample_count: i32) -> i16 {
        let oldest = core::mem::replace(&mut self.window[self.cursor], sample);
        self.sum = self.sum - i32::from(oldest) + i32::from(sample);
        self.cursor = (self.cursor + 1) % N;
        self.filled = (self.filled + 1).min(N);

        if sample_count < max_sample_count {
            sample
        } else {
            self.mean()
        }
    }

    /// Add a sample, tracking the fill level internally
    ///
    /// Returns raw samples until the window is full.
    pub fn push(&mut self, sample: i16) -> i16 {
        let count = self.filled + 1;
        self.update(sample, count as i32, N as i32)
    }

    /// Current window mean, counting unfilled slots as zero
    pub fn mean(&self) -> i16 {
        // Mean of i16 slots is itself in i16 range
        (self.sum / N as i32) as i16
    }

    /// Window holds `N` real samples
    pub fn is_full(&self) -> bool {
        self.filled == N
    }

    /// Drop all samples
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<const N: usize> Default for SlidingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean of a slice, truncated toward zero; `0` for an empty slice
pub fn average(values: &[i16]) -> i16 {
    if values.is_empty() {
        return 0;
    }
    let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
    (sum / values.len() as i64) as i16
}

/// Midpoint of two `i32` values without intermediate overflow
#[inline]
pub const fn average_pair(x: i32, y: i32) -> i32 {
    ((x as i64 + y as i64) / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_window_of_four() {
        let mut avg = SlidingAverage::<4>::new();
        let out: heapless::Vec<i16, 4> = [10, 20, 30, 40]
            .iter()
            .enumerate()
            .map(|(i, &s)| avg.update(s, i as i32 + 1, 4))
            .collect();
        assert_eq!(out, [10, 20, 30, 25]);
        assert_eq!(avg.update(8, 5, 4), 24);
    }

    #[test]
    fn test_push_ramps_up() {
        let mut avg = SlidingAverage::<4>::new();
        assert_eq!(avg.push(10), 10);
        assert_eq!(avg.push(20), 20);
        assert_eq!(avg.push(30), 30);
        assert!(!avg.is_full());
        assert_eq!(avg.push(40), 25);
        assert!(avg.is_full());
        assert_eq!(avg.push(8), 24);
    }

    #[test]
    fn test_truncates_toward_zero() {
        let mut avg = SlidingAverage::<2>::new();
        avg.push(-3);
        assert_eq!(avg.push(0), -1);
    }

    #[test]
    fn test_extreme_samples() {
        let mut avg = SlidingAverage::<3>::new();
        for _ in 0..3 {
            avg.push(i16::MIN);
        }
        assert_eq!(avg.mean(), i16::MIN);
        for _ in 0..3 {
            avg.push(i16::MAX);
        }
        assert_eq!(avg.mean(), i16::MAX);
    }

    #[test]
    fn test_reset() {
        let mut avg = SlidingAverage::<2>::new();
        avg.push(100);
        avg.push(100);
        avg.reset();
        assert_eq!(avg.mean(), 0);
        assert!(!avg.is_full());
        assert_eq!(avg.push(7), 7);
    }

    #[test]
    fn test_array_average() {
        assert_eq!(average(&[]), 0);
        assert_eq!(average(&[5]), 5);
        assert_eq!(average(&[1, 2, 3, 4]), 2);
        assert_eq!(average(&[-1, -2]), -1);
        assert_eq!(average(&[i16::MAX; 200]), i16::MAX);
    }

    #[test]
    fn test_pair_average() {
        assert_eq!(average_pair(i32::MAX, i32::MAX), i32::MAX);
        assert_eq!(average_pair(i32::MIN, i32::MIN), i32::MIN);
        assert_eq!(average_pair(i32::MIN, i32::MAX), 0);
        assert_eq!(average_pair(-3, 0), -1);
        assert_eq!(average_pair(3, 0), 1);
    }

    proptest! {
        #[test]
        fn prop_full_window_matches_plain_mean(
            samples in proptest::collection::vec(any::<i16>(), 8..64),
        ) {
            let mut avg = SlidingAverage::<8>::new();
            let mut last = 0;
            for &s in &samples {
                last = avg.push(s);
            }
            prop_assert_eq!(last, average(&samples[samples.len() - 8..]));
        }
    }
}
