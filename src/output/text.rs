use super::{Formatter, ResponseRow};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, row: &ResponseRow) -> String {
        match row {
            ResponseRow::Impulse(s) => format!("h[{:>3}] = {:>+.9}", s.index, s.value),
            ResponseRow::Frequency(p) if self.verbose => format!(
                "{:>7.1} Hz: {:>8.2} dB (|H| = {:.6})",
                p.frequency_hz, p.magnitude_db, p.magnitude
            ),
            ResponseRow::Frequency(p) => {
                format!("{:>7.1} Hz: {:>8.2} dB", p.frequency_hz, p.magnitude_db)
            }
        }
    }
}
