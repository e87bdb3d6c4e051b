use dioxus::prelude::*;

use crate::domain::entities::operation::Operation;
use crate::ui::style::operation_item_style;

#[component]
pub fn OperationPalette(
    selected: Option<Operation>,
    on_drag_start: EventHandler<Operation>,
    on_drag_end: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            style: "margin-top: 16px; display: flex; align-items: center; justify-content: center;",
            for operation in Operation::ALL {
                div {
                    key: "{operation}",
                    style: operation_item_style(selected == Some(operation)),
                    draggable: "true",
                    ondragstart: move |_| on_drag_start.call(operation),
                    ondragend: move |_| on_drag_end.call(()),
                    {operation.label()}
                }
            }
        }
    }
}
