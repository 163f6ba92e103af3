pub mod filter;
pub mod fir_core;
pub mod fir_lowpass;
pub mod response;

pub use filter::Filter;
pub use fir_core::FirFilterCore;
pub use fir_lowpass::FirLowpass;
pub use response::{
    ImpulseSample, ResponsePoint, dc_gain, frequency_response, impulse_response, is_symmetric,
    magnitude_db, response_table,
};
