mod generate;

pub use generate::{SAMPLE_RATE, dc, impulse, interleave, sine};
