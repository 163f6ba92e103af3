//! Frequency-domain checks of a tap table
//!
//! These evaluate the FIR transfer function directly from the taps,
//! `H(f) = sum_k taps[k] * exp(-j 2 pi f k)`, with `f` in cycles per sample.

use num_complex::Complex64;
use serde::Serialize;
use std::f64::consts::PI;

use crate::signal_processing::Filter;

/// One point of a magnitude response table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponsePoint {
    pub frequency_hz: f64,
    pub magnitude: f64,
    pub magnitude_db: f64,
}

/// One output sample of an impulse response
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpulseSample {
    pub index: usize,
    pub value: f64,
}

/// Complex response at `normalized_freq` cycles per sample (0.5 = Nyquist)
pub fn frequency_response(taps: &[f64], normalized_freq: f64) -> Complex64 {
    let omega = -2.0 * PI * normalized_freq;
    taps.iter()
        .enumerate()
        .map(|(k, &tap)| Complex64::from_polar(tap, omega * k as f64))
        .sum()
}

/// Magnitude response in dB at `freq_hz`
pub fn magnitude_db(taps: &[f64], freq_hz: f64, sample_rate: f64) -> f64 {
    20.0 * frequency_response(taps, freq_hz / sample_rate).norm().log10()
}

/// Gain at zero frequency
pub fn dc_gain(taps: &[f64]) -> f64 {
    taps.iter().sum()
}

/// Whether the taps mirror around their center (linear phase)
pub fn is_symmetric(taps: &[f64], tolerance: f64) -> bool {
    taps.iter()
        .zip(taps.iter().rev())
        .all(|(a, b)| (a - b).abs() <= tolerance)
}

/// Reset `filter` and record its response to a unit impulse
pub fn impulse_response<F: Filter>(filter: &mut F, len: usize) -> Vec<ImpulseSample> {
    filter.reset();
    let response = (0..len)
        .map(|index| {
            let input = if index == 0 { 1.0 } else { 0.0 };
            ImpulseSample {
                index,
                value: filter.process(input),
            }
        })
        .collect();
    filter.reset();
    response
}

/// Magnitude response at `points` evenly spaced frequencies from DC to Nyquist
pub fn response_table(taps: &[f64], sample_rate: f64, points: usize) -> Vec<ResponsePoint> {
    let nyquist = sample_rate / 2.0;
    let step = if points > 1 {
        nyquist / (points - 1) as f64
    } else {
        0.0
    };

    (0..points)
        .map(|i| {
            let frequency_hz = i as f64 * step;
            let magnitude = frequency_response(taps, frequency_hz / sample_rate).norm();
            ResponsePoint {
                frequency_hz,
                magnitude,
                magnitude_db: 20.0 * magnitude.log10(),
            }
        })
        .collect()
}
