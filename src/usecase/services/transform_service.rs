use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::dataset::{Dataset, Field, Record};
use crate::domain::entities::operation::Operation;

/// Reads the longest numeric prefix of `value`, skipping leading whitespace.
/// `"5kg"` reads as 5, `"kg5"` and `""` do not read at all.
pub fn parse_leading_float(value: &str) -> Option<f64> {
    let text = value.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = text.as_bytes();
    let len = bytes.len();
    let is_digit = |idx: usize| idx < len && bytes[idx].is_ascii_digit();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        let sign = if bytes[0] == b'-' { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digit_count = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        let frac_count = frac_end - frac_start;
        if digit_count > 0 || frac_count > 0 {
            end = frac_end;
            digit_count += frac_count;
        }
    }

    if digit_count == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

pub fn transform_value(value: Option<&str>, operation: Operation) -> Option<String> {
    let raw = value?;
    match parse_leading_float(raw) {
        Some(number) => Some(format_number(operation.apply(number))),
        None => Some(raw.to_string()),
    }
}

pub fn transform_record(record: &Record, operation: Operation) -> Record {
    let fields = record
        .fields()
        .iter()
        .map(|field| Field {
            column: field.column.clone(),
            value: transform_value(field.value.as_deref(), operation),
        })
        .collect();
    Record::from_fields(fields)
}

/// Returns `dataset` with the row at `target` replaced by its transformed
/// copy. Every other row is shared with the input. Without an operation, or
/// when `target` is the selected row or out of range, the dataset comes back
/// unchanged.
pub fn apply_operation(
    dataset: &Dataset,
    operation: Option<Operation>,
    target: usize,
    selected_row: Option<usize>,
) -> Dataset {
    let Some(operation) = operation else {
        return dataset.clone();
    };
    if selected_row == Some(target) {
        return dataset.clone();
    }
    let Some(record) = dataset.get(target) else {
        debug!(row = target, rows = dataset.len(), "operation target out of range");
        return dataset.clone();
    };

    let mut records = dataset.records.clone();
    records[target] = Arc::new(transform_record(record, operation));
    debug!(%operation, row = target, "applied operation to row");
    Dataset::new(dataset.columns.clone(), records)
}
