use dioxus::prelude::*;
use dioxus::html::HasFileData;
use tracing::warn;

use crate::config::APP_TITLE;
use crate::domain::entities::command::Command;
use crate::platform::{pick_csv, HAS_FILE_DIALOG};
use crate::ui::components::dataset_table::{DatasetTable, WorkingTable};
use crate::ui::components::operation_palette::OperationPalette;
use crate::ui::state::app_state::AppState;
use crate::ui::style::{drop_zone_style, PAGE_STYLE, PAPER_STYLE};
use crate::usecase::services::import_service::load_text;

#[component]
pub fn App() -> Element {
    let mut app = AppState::new();
    let etl = app.etl.read().clone();
    let dragging_row = (app.dragging_row)();
    let drop_active = (app.drop_active)();

    let handle_file_drop = move |evt: DragEvent| {
        evt.prevent_default();
        app.drop_active.set(false);

        let Some(file) = evt.files().into_iter().next() else {
            warn!("no file was dropped");
            return;
        };
        spawn(async move {
            let name = file.name();
            match file.read_string().await {
                Ok(text) => app.dispatch(load_text(Some(name), text)),
                Err(err) => warn!(file = %name, "failed to read dropped file: {err}"),
            }
        });
    };

    let handle_open_csv = move |_: MouseEvent| match pick_csv() {
        Some(Ok(command)) => app.dispatch(command),
        Some(Err(err)) => warn!("failed to open csv: {err:#}"),
        None => {}
    };

    let handle_row_drop = move |target: usize| {
        let from = *app.dragging_row.peek();
        app.dragging_row.set(None);
        match from {
            Some(from) => app.dispatch(Command::ReorderRow { from, to: target }),
            None => {
                let operation = app.etl.peek().selected_operation;
                app.dispatch(Command::ApplyOperation { operation, target });
            }
        }
    };

    rsx! {
        document::Title { "{APP_TITLE}" }
        div { style: "{PAGE_STYLE}",
            h1 { style: "text-align: center;", "{APP_TITLE}" }

            div { style: "{PAPER_STYLE}",
                h2 { "CSV Data" }
                if let Some(source_name) = etl.source_name.as_ref() {
                    p { style: "color: #555;", "{source_name}" }
                }
                if HAS_FILE_DIALOG {
                    button { onclick: handle_open_csv, "Open CSV…" }
                }
                div {
                    style: drop_zone_style(drop_active),
                    ondragover: move |evt: DragEvent| {
                        evt.prevent_default();
                        app.drop_active.set(true);
                    },
                    ondragleave: move |_| app.drop_active.set(false),
                    ondrop: handle_file_drop,
                    if etl.has_rows() {
                        DatasetTable { dataset: etl.original.clone() }
                    } else {
                        p { "No CSV file uploaded" }
                    }
                }
            }

            div { style: "{PAPER_STYLE}",
                h2 { "Transformed Data" }
                WorkingTable {
                    dataset: etl.working.clone(),
                    dragging_row,
                    on_row_drag_start: move |row_idx| app.dragging_row.set(Some(row_idx)),
                    on_row_drag_end: move |_| app.dragging_row.set(None),
                    on_row_drop: handle_row_drop,
                }
            }

            div { style: "{PAPER_STYLE}",
                h2 { "Operations" }
                OperationPalette {
                    selected: etl.selected_operation,
                    on_drag_start: move |operation| app.dispatch(Command::SelectOperation(operation)),
                    on_drag_end: move |_| app.dispatch(Command::ClearOperation),
                }
            }

            if !etl.status.is_empty() {
                p { style: "color: #555;", "{etl.status}" }
            }
        }
    }
}
