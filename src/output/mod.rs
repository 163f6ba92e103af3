mod csv;
mod json;
mod text;

use serde::Serialize;

use crate::signal_processing::{ImpulseSample, ResponsePoint};

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Which kind of report a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Impulse,
    Frequency,
}

/// One line of a filter response report
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum ResponseRow {
    Impulse(ImpulseSample),
    Frequency(ResponsePoint),
}

impl ResponseRow {
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::Impulse(_) => ReportKind::Impulse,
            Self::Frequency(_) => ReportKind::Frequency,
        }
    }
}

pub trait Formatter: Send {
    fn format(&self, row: &ResponseRow) -> String;

    fn header(&self, _kind: ReportKind) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// Render a complete report, header first when the format has one
pub fn render(formatter: &dyn Formatter, rows: &[ResponseRow]) -> Vec<String> {
    let header = rows
        .first()
        .and_then(|row| formatter.header(row.kind()))
        .map(str::to_string);
    header
        .into_iter()
        .chain(rows.iter().map(|row| formatter.format(row)))
        .collect()
}
