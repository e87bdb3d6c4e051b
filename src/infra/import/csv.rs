use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::entities::dataset::{Dataset, Field, Record};

const LINE_SEPARATOR: char = '\n';
const FIELD_SEPARATOR: char = ',';

/// Splits `text` into a header line and data lines. Every line after the
/// header becomes a record, blank ones included. Short lines leave the
/// trailing columns undefined and long lines lose their extra fields.
pub fn parse_csv(text: &str) -> Dataset {
    let mut lines = text.split(LINE_SEPARATOR);
    let header_line = lines.next().unwrap_or_default();

    // (column, position of the value it takes); a repeated header keeps its
    // first slot and reads from its last occurrence.
    let mut layout: Vec<(&str, usize)> = Vec::new();
    let mut slot_by_column: HashMap<&str, usize> = HashMap::new();
    for (col_idx, header) in header_line.split(FIELD_SEPARATOR).enumerate() {
        match slot_by_column.get(header) {
            Some(&slot) => layout[slot].1 = col_idx,
            None => {
                slot_by_column.insert(header, layout.len());
                layout.push((header, col_idx));
            }
        }
    }

    let records = lines
        .map(|line| {
            let values: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            let fields = layout
                .iter()
                .map(|&(column, value_idx)| Field {
                    column: column.to_string(),
                    value: values.get(value_idx).map(|value| value.to_string()),
                })
                .collect();
            Arc::new(Record::from_fields(fields))
        })
        .collect();

    let columns = layout
        .into_iter()
        .map(|(column, _)| column.to_string())
        .collect();

    Dataset::new(columns, records)
}

pub fn read_csv_text(csv_path: &Path) -> Result<String> {
    std::fs::read_to_string(csv_path)
        .with_context(|| format!("failed to read csv: {}", csv_path.display()))
}
