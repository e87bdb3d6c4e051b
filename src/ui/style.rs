pub const PAGE_STYLE: &str = "max-width: 960px; margin: 32px auto; font-family: sans-serif; display: flex; flex-direction: column; gap: 16px;";
pub const PAPER_STYLE: &str = "padding: 16px; background: #fff; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.15);";
pub const CELL_STYLE: &str = "border: 1px solid #bbb; padding: 4px 6px;";

pub fn drop_zone_style(active: bool) -> String {
    let border = if active { "#4a7bd8" } else { "#ccc" };
    format!("padding: 16px; border: 1px dashed {border};")
}

pub fn table_container_style() -> &'static str {
    "margin-top: 16px; overflow-x: auto;"
}

pub fn table_header_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 6px; background: #f2f2f2; text-align: left;"
}

pub fn row_style(dragging: bool) -> &'static str {
    if dragging {
        "cursor: grab; background: #eef4ff; opacity: 0.6;"
    } else {
        "cursor: grab;"
    }
}

pub fn operation_item_style(selected: bool) -> &'static str {
    if selected {
        "padding: 8px; margin: 8px; background: #dde7ff; border-radius: 4px; cursor: grabbing;"
    } else {
        "padding: 8px; margin: 8px; background: #eee; border-radius: 4px; cursor: grab;"
    }
}
