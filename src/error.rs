use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid filter configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Non-finite sample rejected: {0}")]
    InvalidSample(f64),

    #[error("Interleaved buffer of {len} samples does not divide into {channels} channels")]
    InvalidBuffer { len: usize, channels: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
