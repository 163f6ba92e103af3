use std::sync::Arc;

use crate::config::{FilterConfig, NonFinitePolicy};
use crate::constants::LOWPASS_TAPS;
use crate::error::Result;
use crate::signal_processing::FirFilterCore;

/// FIR lowpass filter with linear phase response
///
/// Wraps [`FirFilterCore`] with a tap table and a policy for NaN and infinite
/// input. The default table is the built-in 32-tap design for a 2048 Hz sample
/// rate (see [`crate::constants`]).
#[derive(Debug, Clone)]
pub struct FirLowpass {
    core: FirFilterCore,
    policy: NonFinitePolicy,
}

impl FirLowpass {
    /// Create the built-in 32-tap lowpass, propagating non-finite samples
    pub fn new() -> Result<Self> {
        Self::with_taps(LOWPASS_TAPS, NonFinitePolicy::Propagate)
    }

    /// Create a lowpass from an arbitrary tap table
    ///
    /// # Errors
    /// Returns `FilterError::InvalidConfiguration` if the table is rejected by
    /// [`FirFilterCore::new`].
    pub fn with_taps(taps: impl Into<Arc<[f64]>>, policy: NonFinitePolicy) -> Result<Self> {
        Ok(Self {
            core: FirFilterCore::new(taps)?,
            policy,
        })
    }

    /// Create a lowpass from a loaded configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        Self::with_taps(config.tap_table(), config.non_finite)
    }

    /// New instance in the reset state, sharing this filter's taps and policy
    pub fn fresh_instance(&self) -> Self {
        let mut fresh = self.clone();
        fresh.core.reset();
        fresh
    }

    /// Filter a single sample, applying the non-finite policy
    ///
    /// # Errors
    /// Returns `FilterError::InvalidSample` under [`NonFinitePolicy::Reject`]
    /// when the sample is NaN or infinite. Filter state is unchanged.
    pub fn process_sample(&mut self, sample: f64) -> Result<f64> {
        if sample.is_finite() {
            return Ok(self.core.push(sample));
        }

        match self.policy {
            NonFinitePolicy::Propagate => Ok(self.core.push(sample)),
            NonFinitePolicy::Reject => {
                log::debug!("Rejecting non-finite sample {}", sample);
                self.core.try_push(sample)
            }
            NonFinitePolicy::Zero => {
                log::trace!("Substituting 0.0 for non-finite sample {}", sample);
                Ok(self.core.push(0.0))
            }
        }
    }

    /// Filter a buffer of samples in-place
    ///
    /// On error the samples before the rejected one have already been
    /// filtered; the rejected sample and everything after it are untouched.
    pub fn process_buffer(&mut self, buffer: &mut [f64]) -> Result<()> {
        for sample in buffer.iter_mut() {
            *sample = self.process_sample(*sample)?;
        }
        Ok(())
    }

    /// Forget all past sample history
    pub fn reset(&mut self) {
        log::trace!("Resetting {}-tap lowpass", self.core.num_taps());
        self.core.reset();
    }

    /// Get the non-finite sample policy
    pub fn policy(&self) -> NonFinitePolicy {
        self.policy
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.core.num_taps()
    }

    /// Get the group delay in samples
    pub fn group_delay_samples(&self) -> f64 {
        self.core.group_delay_samples()
    }

    /// Get access to the tap coefficients
    pub fn taps(&self) -> &[f64] {
        self.core.taps()
    }

    /// Access the underlying convolution engine
    pub fn core(&self) -> &FirFilterCore {
        &self.core
    }
}
