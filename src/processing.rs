use crate::config::{FilterConfig, NonFinitePolicy};
use crate::error::{FilterError, Result};
use crate::signal_processing::FirLowpass;

/// Filters an interleaved multichannel stream
///
/// Holds one independent lowpass per channel. All channels share a single tap
/// table; only the delay lines are per channel.
pub struct ChannelProcessor {
    filters: Vec<FirLowpass>,
}

impl ChannelProcessor {
    pub fn new(config: &FilterConfig, channels: usize) -> Result<Self> {
        if channels == 0 {
            return Err(FilterError::InvalidConfiguration(
                "at least one channel is required".to_string(),
            ));
        }

        let template = FirLowpass::from_config(config)?;
        let filters = std::iter::repeat_with(|| template.fresh_instance())
            .take(channels)
            .collect();

        log::debug!(
            "Channel processor: {} channels x {} taps",
            channels,
            template.num_taps()
        );

        Ok(Self { filters })
    }

    /// Filter an interleaved buffer in-place
    ///
    /// The buffer may hold any whole number of frames; state carries over
    /// between calls so a stream can be fed in arbitrary block sizes.
    ///
    /// Under [`NonFinitePolicy::Reject`] a frame is all-or-nothing: frames
    /// before the offending one are filtered, and no channel consumes any
    /// sample of the offending frame.
    pub fn process_interleaved(&mut self, interleaved: &mut [f64]) -> Result<()> {
        let channels = self.filters.len();
        if !interleaved.len().is_multiple_of(channels) {
            return Err(FilterError::InvalidBuffer {
                len: interleaved.len(),
                channels,
            });
        }

        let strict = self.filters[0].policy() == NonFinitePolicy::Reject;
        for frame in interleaved.chunks_exact_mut(channels) {
            if strict {
                if let Some(&bad) = frame.iter().find(|s| !s.is_finite()) {
                    log::debug!("Rejecting frame with non-finite sample {}", bad);
                    return Err(FilterError::InvalidSample(bad));
                }
            }
            for (sample, filter) in frame.iter_mut().zip(self.filters.iter_mut()) {
                *sample = filter.process_sample(*sample)?;
            }
        }
        Ok(())
    }

    /// Filter a whole signal in blocks of `block_frames` frames
    pub fn process_signal(&mut self, interleaved: &mut [f64], block_frames: usize) -> Result<()> {
        let block_len = block_frames.max(1).saturating_mul(self.filters.len());
        for block in interleaved.chunks_mut(block_len) {
            self.process_interleaved(block)?;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.reset();
        }
    }

    pub fn channels(&self) -> usize {
        self.filters.len()
    }

    pub fn filter(&self, channel: usize) -> Option<&FirLowpass> {
        self.filters.get(channel)
    }
}
