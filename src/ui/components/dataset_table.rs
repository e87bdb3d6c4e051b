use dioxus::prelude::*;

use crate::domain::entities::dataset::{Dataset, Record};
use crate::ui::style::{row_style, table_container_style, table_header_cell_style, CELL_STYLE};

fn cell_texts(record: &Record) -> Vec<String> {
    record
        .fields()
        .iter()
        .map(|field| field.value.clone().unwrap_or_default())
        .collect()
}

#[component]
pub fn DatasetTable(dataset: Dataset) -> Element {
    rsx! {
        div {
            style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        for header in dataset.columns.iter() {
                            th { style: "{table_header_cell_style()}", "{header}" }
                        }
                    }
                }
                tbody {
                    for (row_idx, record) in dataset.records.iter().enumerate() {
                        tr { key: "{row_idx}",
                            for value in cell_texts(record) {
                                td { style: "{CELL_STYLE}", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Header cells for the working table. An empty working set shows no header
/// row, since the columns are read off the first row.
pub fn working_headers(dataset: &Dataset) -> &[String] {
    if dataset.is_empty() {
        &[]
    } else {
        &dataset.columns
    }
}

/// The working table. Every row is a drag source for reordering and a drop
/// target for both rows and operation tokens.
#[component]
pub fn WorkingTable(
    dataset: Dataset,
    dragging_row: Option<usize>,
    on_row_drag_start: EventHandler<usize>,
    on_row_drag_end: EventHandler<()>,
    on_row_drop: EventHandler<usize>,
) -> Element {
    let headers = working_headers(&dataset).to_vec();

    rsx! {
        div {
            style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%;",
                if !headers.is_empty() {
                    thead {
                        tr {
                            for header in headers.iter() {
                                th { style: "{table_header_cell_style()}", "{header}" }
                            }
                        }
                    }
                }
                tbody {
                    for (row_idx, record) in dataset.records.iter().enumerate() {
                        tr {
                            key: "{row_idx}",
                            style: row_style(dragging_row == Some(row_idx)),
                            draggable: "true",
                            ondragstart: move |_| on_row_drag_start.call(row_idx),
                            ondragend: move |_| on_row_drag_end.call(()),
                            ondragover: move |evt: DragEvent| evt.prevent_default(),
                            ondrop: move |evt: DragEvent| {
                                evt.prevent_default();
                                on_row_drop.call(row_idx);
                            },
                            for value in cell_texts(record) {
                                td { style: "{CELL_STYLE}", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
