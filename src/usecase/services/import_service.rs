use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::domain::entities::command::Command;
use crate::infra::import::csv::read_csv_text;

pub fn load_text(name: Option<String>, text: String) -> Command {
    info!(
        source = name.as_deref().unwrap_or("(unnamed)"),
        bytes = text.len(),
        "loading csv text"
    );
    Command::LoadDataset { name, text }
}

pub fn load_path(path: &Path) -> Result<Command> {
    let text = read_csv_text(path)?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    Ok(load_text(name, text))
}
