use crate::domain::entities::operation::Operation;

/// Discrete user actions dispatched against the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadDataset {
        name: Option<String>,
        text: String,
    },
    ReorderRow {
        from: usize,
        to: usize,
    },
    ApplyOperation {
        operation: Option<Operation>,
        target: usize,
    },
    SelectOperation(Operation),
    ClearOperation,
    #[allow(dead_code)]
    SelectRow(Option<usize>),
}
