use super::{Formatter, ResponseRow};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, row: &ResponseRow) -> String {
        // Non-finite values (e.g. -inf dB at a response zero) become null.
        match serde_json::to_value(row) {
            Ok(value) => value.to_string(),
            Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
        }
    }
}
