use std::sync::Arc;

/// One cell of a record. `value` is `None` when the source line ran out of
/// fields before reaching this column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub column: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Wraps fields that already carry distinct column names, in column order.
    pub fn from_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    #[allow(dead_code)]
    pub fn get(&self, column: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.column == column)
    }

    #[allow(dead_code)]
    pub fn value(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(|field| field.value.as_deref())
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[allow(dead_code)]
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.column.as_str())
    }
}

/// Header columns plus rows in source order. Rows are shared through `Arc`
/// so a new dataset value can reuse every record it did not replace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<Arc<Record>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Arc<Record>>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, row_idx: usize) -> Option<&Arc<Record>> {
        self.records.get(row_idx)
    }

    /// True when both datasets hold the very same record allocations in the
    /// same order.
    pub fn shares_records_with(&self, other: &Dataset) -> bool {
        self.columns == other.columns
            && self.records.len() == other.records.len()
            && self
                .records
                .iter()
                .zip(other.records.iter())
                .all(|(left, right)| Arc::ptr_eq(left, right))
    }
}
