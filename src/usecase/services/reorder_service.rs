use tracing::warn;

use crate::domain::entities::dataset::Dataset;

/// Moves the row at `from` to position `to`, shifting the rows in between.
/// A `to` past the end lands the row last.
pub fn reorder_rows(dataset: &Dataset, from: usize, to: usize) -> Dataset {
    if from >= dataset.len() {
        warn!(from, rows = dataset.len(), "reorder source out of range");
        return dataset.clone();
    }
    if from == to {
        return dataset.clone();
    }

    let mut records = dataset.records.clone();
    let moved = records.remove(from);
    let to = to.min(records.len());
    records.insert(to, moved);
    Dataset::new(dataset.columns.clone(), records)
}
