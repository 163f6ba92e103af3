use std::sync::Arc;

use crate::error::{FilterError, Result};
use crate::signal_processing::Filter;

/// Ring-buffer FIR convolution engine
///
/// Contains the delay line, cursor, and convolution logic for a single stream.
/// The tap table is shared read-only between instances, so one table can feed
/// a filter per channel without copying.
///
/// The tap count must be a power of two: every index step through the delay
/// line wraps with `& (N - 1)` rather than a modulo.
///
/// # Non-finite input
/// [`push`](Self::push) does not inspect samples. A NaN or infinity poisons the
/// next N outputs, until it is overwritten in the delay line. Use
/// [`try_push`](Self::try_push) to reject such samples instead.
#[derive(Debug, Clone)]
pub struct FirFilterCore {
    taps: Arc<[f64]>,
    history: Box<[f64]>,
    cursor: usize,
    mask: usize,
}

impl FirFilterCore {
    /// Create a new FIR filter core with the given tap coefficients
    ///
    /// # Errors
    /// Returns `FilterError::InvalidConfiguration` if the table is empty, its
    /// length is not a power of two, or any tap is not finite.
    pub fn new(taps: impl Into<Arc<[f64]>>) -> Result<Self> {
        let taps = taps.into();
        let num_taps = taps.len();

        if num_taps == 0 {
            return Err(FilterError::InvalidConfiguration(
                "tap table is empty".to_string(),
            ));
        }
        if !num_taps.is_power_of_two() {
            return Err(FilterError::InvalidConfiguration(format!(
                "tap count {} is not a power of two",
                num_taps
            )));
        }
        if let Some((i, tap)) = taps.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            return Err(FilterError::InvalidConfiguration(format!(
                "tap {} is not finite: {}",
                i, tap
            )));
        }

        if num_taps == 1 {
            log::debug!("Single-tap FIR is a scalar gain of {}", taps[0]);
        } else {
            log::debug!("FIR core constructed with {} taps", num_taps);
        }

        Ok(Self {
            history: vec![0.0; num_taps].into_boxed_slice(),
            taps,
            cursor: 0,
            mask: num_taps - 1,
        })
    }

    /// Zero the delay line and rewind the cursor
    pub fn reset(&mut self) {
        self.history.fill(0.0);
        self.cursor = 0;
    }

    /// Push one sample and return the filtered output
    pub fn push(&mut self, sample: f64) -> f64 {
        let written = self.cursor;
        self.history[written] = sample;
        self.cursor = (written + 1) & self.mask;

        // Walk backward from the newest slot: taps[k] pairs with the sample
        // pushed k calls ago.
        let mut output = sample * self.taps[0];
        let mut index = written;
        for &tap in &self.taps[1..] {
            index = index.wrapping_sub(1) & self.mask;
            output += self.history[index] * tap;
        }
        output
    }

    /// Push one sample, rejecting NaN and infinities
    ///
    /// # Errors
    /// Returns `FilterError::InvalidSample` for a non-finite sample. The filter
    /// state is left untouched in that case.
    pub fn try_push(&mut self, sample: f64) -> Result<f64> {
        if !sample.is_finite() {
            return Err(FilterError::InvalidSample(sample));
        }
        Ok(self.push(sample))
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.taps.len()
    }

    /// Get access to the tap coefficients
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Get a shared handle to the tap table
    pub fn shared_taps(&self) -> Arc<[f64]> {
        Arc::clone(&self.taps)
    }

    /// Index of the next delay line slot to be overwritten
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the group delay in samples (half the filter length for linear phase)
    ///
    /// Fractional for an even tap count.
    pub fn group_delay_samples(&self) -> f64 {
        (self.taps.len() - 1) as f64 / 2.0
    }
}

impl Filter for FirFilterCore {
    fn process(&mut self, sample: f64) -> f64 {
        self.push(sample)
    }

    fn reset(&mut self) {
        FirFilterCore::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp_taps(n: usize) -> Vec<f64> {
        (1..=n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_power_of_two_lengths_construct() {
        for n in [1, 2, 4, 8, 16, 32, 64, 256] {
            let core = FirFilterCore::new(vec![0.5; n]);
            assert!(core.is_ok(), "{} taps should be accepted", n);
            let core = core.unwrap();
            assert_eq!(core.num_taps(), n);
            assert_eq!(core.cursor(), 0);
        }
    }

    #[test]
    fn test_invalid_lengths_rejected() {
        for n in [0, 3, 5, 6, 7, 12, 31, 33, 100] {
            let result = FirFilterCore::new(vec![0.5; n]);
            assert!(
                matches!(result, Err(FilterError::InvalidConfiguration(_))),
                "{} taps should be rejected",
                n
            );
        }
    }

    #[test]
    fn test_non_finite_tap_rejected() {
        let result = FirFilterCore::new(vec![0.25, f64::NAN, 0.25, 0.25]);
        assert!(matches!(result, Err(FilterError::InvalidConfiguration(_))));

        let result = FirFilterCore::new(vec![f64::INFINITY, 0.0]);
        assert!(matches!(result, Err(FilterError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_impulse_reproduces_taps_in_order() {
        let taps = ramp_taps(8);
        let mut core = FirFilterCore::new(taps.clone()).unwrap();

        let scale = 2.5;
        let mut output = vec![core.push(scale)];
        for _ in 1..16 {
            output.push(core.push(0.0));
        }

        for (k, &tap) in taps.iter().enumerate() {
            assert_abs_diff_eq!(output[k], scale * tap, epsilon = 1e-12);
        }
        for &y in &output[8..] {
            assert_eq!(y, 0.0, "Impulse must age out after N samples");
        }
    }

    #[test]
    fn test_matches_direct_convolution_over_long_stream() {
        let taps = vec![0.1, -0.2, 0.3, 0.4, 0.4, 0.3, -0.2, 0.1];
        let mut core = FirFilterCore::new(taps.clone()).unwrap();

        let input: Vec<f64> = (0..1000)
            .map(|i| (i as f64 * 0.37).sin() + 0.25 * (i as f64 * 1.91).cos())
            .collect();

        for (n, &x) in input.iter().enumerate() {
            let expected: f64 = taps
                .iter()
                .enumerate()
                .filter(|&(k, _)| k <= n)
                .map(|(k, &t)| t * input[n - k])
                .sum();
            let y = core.push(x);
            assert_abs_diff_eq!(y, expected, epsilon = 1e-12);
            assert!(core.cursor() < core.num_taps());
            assert_eq!(core.cursor(), (n + 1) & 7);
        }
    }

    #[test]
    fn test_dc_gain_reached_after_n_samples() {
        let taps = vec![0.1, 0.2, 0.3, 0.15];
        let sum: f64 = taps.iter().sum();
        let mut core = FirFilterCore::new(taps).unwrap();

        let v = 3.0;
        let mut last = 0.0;
        for _ in 0..100 {
            last = core.push(v);
        }
        assert_abs_diff_eq!(last, v * sum, epsilon = 1e-12);
    }

    #[test]
    fn test_reset_matches_fresh_instance() {
        let taps = ramp_taps(4);
        let mut used = FirFilterCore::new(taps.clone()).unwrap();
        for i in 0..11 {
            used.push(i as f64 * 0.7 - 2.0);
        }
        used.reset();
        assert_eq!(used.cursor(), 0);

        let mut fresh = FirFilterCore::new(taps).unwrap();
        for i in 0..20 {
            let x = (i as f64).cos();
            assert_eq!(used.push(x), fresh.push(x));
        }
    }

    #[test]
    fn test_deterministic_runs() {
        let taps = vec![0.3, -0.1, 0.5, 0.25, -0.05, 0.0, 0.1, 0.02];
        let input: Vec<f64> = (0..500).map(|i| ((i * 7919) % 113) as f64 / 113.0).collect();

        let mut a = FirFilterCore::new(taps.clone()).unwrap();
        let mut b = FirFilterCore::new(taps).unwrap();
        let out_a: Vec<f64> = input.iter().map(|&x| a.push(x)).collect();
        let out_b: Vec<f64> = input.iter().map(|&x| b.push(x)).collect();
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn test_single_tap_is_scalar_gain() {
        let mut core = FirFilterCore::new(vec![0.75]).unwrap();
        for x in [1.0, -4.0, 0.0, 123.5, 2.0] {
            assert_eq!(core.push(x), 0.75 * x);
            assert_eq!(core.cursor(), 0);
        }
        assert_eq!(core.group_delay_samples(), 0.0);
    }

    #[test]
    fn test_try_push_rejects_without_mutating() {
        let taps = ramp_taps(4);
        let mut strict = FirFilterCore::new(taps.clone()).unwrap();
        let mut reference = FirFilterCore::new(taps).unwrap();

        strict.try_push(1.0).unwrap();
        reference.push(1.0);

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = strict.try_push(bad);
            assert!(matches!(result, Err(FilterError::InvalidSample(_))));
        }
        assert_eq!(strict.cursor(), reference.cursor());

        for x in [0.5, -1.0, 2.0, 0.0, 0.0, 0.0] {
            assert_eq!(strict.try_push(x).unwrap(), reference.push(x));
        }
    }

    #[test]
    fn test_nan_ages_out_of_window() {
        let mut core = FirFilterCore::new(ramp_taps(4)).unwrap();
        assert!(core.push(f64::NAN).is_nan());
        for _ in 0..3 {
            assert!(core.push(1.0).is_nan());
        }
        assert_abs_diff_eq!(core.push(1.0), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_process_buffer_matches_push() {
        let taps = ramp_taps(8);
        let mut core = FirFilterCore::new(taps.clone()).unwrap();
        let mut reference = FirFilterCore::new(taps).unwrap();

        let mut buffer: Vec<f64> = (0..40).map(|i| (i % 5) as f64).collect();
        let expected: Vec<f64> = buffer.iter().map(|&x| reference.push(x)).collect();
        core.process_buffer(&mut buffer);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_instances_share_tap_table() {
        let core = FirFilterCore::new(ramp_taps(16)).unwrap();
        let other = FirFilterCore::new(core.shared_taps()).unwrap();
        assert!(Arc::ptr_eq(&core.shared_taps(), &other.shared_taps()));
        assert_eq!(other.group_delay_samples(), 7.5);
    }
}
