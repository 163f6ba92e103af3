use super::{Formatter, ReportKind, ResponseRow};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, row: &ResponseRow) -> String {
        match row {
            ResponseRow::Impulse(s) => format!("{},{:.9}", s.index, s.value),
            ResponseRow::Frequency(p) => format!(
                "{:.3},{:.6},{:.3}",
                p.frequency_hz, p.magnitude, p.magnitude_db
            ),
        }
    }

    fn header(&self, kind: ReportKind) -> Option<&'static str> {
        Some(match kind {
            ReportKind::Impulse => "index,value",
            ReportKind::Frequency => "frequency_hz,magnitude,magnitude_db",
        })
    }
}
