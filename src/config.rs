//! Filter configuration.
//!
//! A configuration can be loaded from a TOML file. Every key is optional:
//!
//! ```toml
//! sample_rate = 2048.0
//! non_finite = "reject"
//! taps = [0.25, 0.25, 0.25, 0.25]
//! ```
//!
//! When `taps` is absent the built-in 32-tap lowpass is used.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::constants::{LOWPASS_SAMPLE_RATE_HZ, LOWPASS_TAPS};
use crate::error::{FilterError, Result};

/// Handling of NaN and infinite input samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NonFinitePolicy {
    /// Feed the sample through; outputs are non-finite until it leaves the window
    #[default]
    Propagate,
    /// Fail with `InvalidSample` and leave the filter state unchanged
    Reject,
    /// Filter 0.0 in place of the sample
    Zero,
}

impl fmt::Display for NonFinitePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Propagate => "propagate",
            Self::Reject => "reject",
            Self::Zero => "zero",
        };
        f.write_str(name)
    }
}

/// Filter configuration
///
/// # Example
/// ```
/// use pdmfilter::config::{FilterConfig, NonFinitePolicy};
///
/// let config = FilterConfig::from_toml_str("non_finite = \"zero\"").unwrap();
/// assert_eq!(config.non_finite, NonFinitePolicy::Zero);
/// assert_eq!(config.tap_table().len(), 32);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Sample rate the taps are designed for, in Hz (used for response reports)
    pub sample_rate: f64,
    /// What to do with NaN and infinite samples
    pub non_finite: NonFinitePolicy,
    /// Custom tap table; the built-in lowpass when `None`
    pub taps: Option<Vec<f64>>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            sample_rate: LOWPASS_SAMPLE_RATE_HZ,
            non_finite: NonFinitePolicy::Propagate,
            taps: None,
        }
    }
}

impl FilterConfig {
    /// Read and parse a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| FilterError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded {} ({} taps, {} Hz, non-finite: {})",
            path.display(),
            config.tap_table().len(),
            config.sample_rate,
            config.non_finite
        );
        Ok(config)
    }

    /// Parse a configuration from TOML text
    ///
    /// The tap table itself is validated when a filter is built from it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))?;

        if !config.sample_rate.is_finite() || config.sample_rate <= 0.0 {
            return Err(FilterError::Config(format!(
                "sample_rate must be positive, got {}",
                config.sample_rate
            )));
        }
        Ok(config)
    }

    /// Tap table to share between filter instances
    pub fn tap_table(&self) -> Arc<[f64]> {
        match &self.taps {
            Some(taps) => Arc::from(taps.as_slice()),
            None => Arc::from(LOWPASS_TAPS),
        }
    }
}
