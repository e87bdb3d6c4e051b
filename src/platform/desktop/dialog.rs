use anyhow::Result;
use rfd::FileDialog;

use crate::domain::entities::command::Command;
use crate::usecase::services::import_service::load_path;

pub fn pick_csv() -> Option<Result<Command>> {
    let file_path = FileDialog::new()
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file()?;
    Some(load_path(&file_path))
}
