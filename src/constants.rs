//! Built-in low-pass design
//!
//! 32-tap linear-phase FIR designed for a 2048 Hz sample rate:
//!
//! * Pass band 0 Hz - 512 Hz, gain 1, desired ripple 1 dB, actual ripple 0.37 dB
//! * Stop band 512 Hz - 1024 Hz, gain 0, desired attenuation -40 dB,
//!   actual attenuation -46.15 dB

/// Sample rate the built-in taps were designed for, in Hz.
pub const LOWPASS_SAMPLE_RATE_HZ: f64 = 2048.0;

/// Upper edge of the pass band in Hz.
pub const LOWPASS_PASSBAND_EDGE_HZ: f64 = 512.0;

/// Frequency above which the stop band attenuation is met, in Hz.
pub const LOWPASS_STOPBAND_EDGE_HZ: f64 = 640.0;

/// Tap coefficients of the built-in low-pass filter.
///
/// Symmetric, so the filter has linear phase with a group delay of 15.5 samples.
pub const LOWPASS_TAPS: [f64; 32] = [
    0.004902976537587121,
    -0.003848680346403288,
    -0.01344100739497891,
    0.000365702301723367,
    0.012456560428623616,
    -0.009746219260722114,
    -0.01662548164089962,
    0.020488459862084474,
    0.015961872380948205,
    -0.03791921428939781,
    -0.008557759377898273,
    0.0644394686133685,
    -0.015038216682644084,
    -0.1162658438508493,
    0.10505867020106813,
    0.4871082473199869,
    0.4871082473199869,
    0.10505867020106813,
    -0.1162658438508493,
    -0.015038216682644084,
    0.0644394686133685,
    -0.008557759377898273,
    -0.03791921428939781,
    0.015961872380948205,
    0.020488459862084474,
    -0.01662548164089962,
    -0.009746219260722114,
    0.012456560428623616,
    0.000365702301723367,
    -0.01344100739497891,
    -0.003848680346403288,
    0.004902976537587121,
];
