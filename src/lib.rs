pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod processing;
pub mod signal_processing;
pub mod wav;

pub use config::{FilterConfig, NonFinitePolicy};
pub use error::{FilterError, Result};
pub use processing::ChannelProcessor;
pub use signal_processing::{Filter, FirFilterCore, FirLowpass};
pub use wav::{WavData, read_wav, save_wav};
