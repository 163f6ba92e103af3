use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

/// Interleaved samples of a WAV file
#[derive(Debug, Clone)]
pub struct WavData {
    pub samples: Vec<f64>,
    pub channels: u16,
    pub sample_rate: u32,
}

impl WavData {
    /// Number of whole frames
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }
}

/// Read a WAV file, scaling integer samples to [-1.0, 1.0)
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<WavData, hound::Error> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = 2_i64.pow(spec.bits_per_sample as u32 - 1) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    Ok(WavData {
        samples,
        channels: spec.channels,
        sample_rate: spec.sample_rate,
    })
}

/// Write interleaved samples as a 32-bit float WAV file
pub fn save_wav<P: AsRef<Path>>(path: P, data: &WavData) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: data.channels,
        sample_rate: data.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;

    for &sample in &data.samples {
        writer.write_sample(sample as f32)?;
    }

    writer.finalize()?;
    Ok(())
}
