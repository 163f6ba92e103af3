use std::f64::consts::PI;

/// Sample rate of the built-in lowpass design
pub const SAMPLE_RATE: f64 = 2048.0;

/// Scaled unit impulse followed by `len - 1` zeros
pub fn impulse(amplitude: f64, len: usize) -> Vec<f64> {
    let mut signal = vec![0.0; len];
    if let Some(first) = signal.first_mut() {
        *first = amplitude;
    }
    signal
}

/// Constant signal
pub fn dc(value: f64, len: usize) -> Vec<f64> {
    vec![value; len]
}

/// Sine wave at `freq_hz`, sampled at [`SAMPLE_RATE`]
pub fn sine(freq_hz: f64, amplitude: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| amplitude * (2.0 * PI * freq_hz * i as f64 / SAMPLE_RATE).sin())
        .collect()
}

/// Interleave equal-length channels into frames
pub fn interleave(channels: &[Vec<f64>]) -> Vec<f64> {
    let frames = channels.iter().map(Vec::len).min().unwrap_or(0);
    (0..frames)
        .flat_map(|i| channels.iter().map(move |ch| ch[i]))
        .collect()
}
