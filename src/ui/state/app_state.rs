use dioxus::prelude::*;
use tracing::info;

use crate::domain::entities::command::Command;
use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::operation::Operation;
use crate::infra::import::csv::parse_csv;
use crate::usecase::services::reorder_service::reorder_rows;
use crate::usecase::services::transform_service::apply_operation;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EtlState {
    pub original: Dataset,
    pub working: Dataset,
    pub source_name: Option<String>,
    pub selected_operation: Option<Operation>,
    pub selected_row: Option<usize>,
    pub status: String,
}

impl EtlState {
    pub fn has_rows(&self) -> bool {
        !self.original.is_empty()
    }
}

/// Produces the state that follows `command`. A command with no effect
/// returns a clone of `state` that shares every record with it.
pub fn reduce(state: &EtlState, command: Command) -> EtlState {
    match command {
        Command::LoadDataset { name, text } => {
            let dataset = parse_csv(&text);
            let source = name.as_deref().unwrap_or("dropped file");
            info!(source, rows = dataset.len(), columns = dataset.columns.len(), "dataset loaded");
            let status = format!("Loaded {} rows from {source}", dataset.len());
            EtlState {
                original: dataset.clone(),
                working: dataset,
                source_name: name,
                status,
                ..state.clone()
            }
        }
        Command::ReorderRow { from, to } => {
            let working = reorder_rows(&state.working, from, to);
            if working.shares_records_with(&state.working) {
                return state.clone();
            }
            let landed = to.min(working.len().saturating_sub(1));
            EtlState {
                working,
                status: format!("Moved row {} to position {}", from + 1, landed + 1),
                ..state.clone()
            }
        }
        Command::ApplyOperation { operation, target } => {
            let working = apply_operation(&state.working, operation, target, state.selected_row);
            match operation {
                Some(op) if !working.shares_records_with(&state.working) => EtlState {
                    working,
                    status: format!("Applied {} to row {}", op.label(), target + 1),
                    ..state.clone()
                },
                _ => state.clone(),
            }
        }
        Command::SelectOperation(operation) => EtlState {
            selected_operation: Some(operation),
            ..state.clone()
        },
        Command::ClearOperation => EtlState {
            selected_operation: None,
            ..state.clone()
        },
        Command::SelectRow(row) => EtlState {
            selected_row: row,
            ..state.clone()
        },
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub etl: Signal<EtlState>,
    pub dragging_row: Signal<Option<usize>>,
    pub drop_active: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            etl: use_signal(EtlState::default),
            dragging_row: use_signal(|| None::<usize>),
            drop_active: use_signal(|| false),
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        let next = reduce(&self.etl.peek(), command);
        self.etl.set(next);
    }
}
