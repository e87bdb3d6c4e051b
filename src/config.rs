use tracing::Level;

pub const APP_TITLE: &str = "ETL Tool";
pub const LOG_LEVEL_ENV: &str = "ETL_TOOL_LOG";
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[cfg(feature = "desktop")]
const PROJECT_DIRS: (&str, &str, &str) = ("com", "hellhbbd", "etl-tool");

/// Accepts any name or number `tracing::Level` parses. Unknown or empty
/// values fall back to [`DEFAULT_LOG_LEVEL`].
pub fn parse_log_level(value: &str) -> Level {
    value.trim().parse::<Level>().unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn log_level() -> Level {
    std::env::var(LOG_LEVEL_ENV)
        .map(|value| parse_log_level(&value))
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn init_logging() {
    let level = log_level();
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
}

#[cfg(feature = "desktop")]
pub fn ensure_webview_data_dir(base_data_dir: &std::path::Path) -> anyhow::Result<std::path::PathBuf> {
    use anyhow::Context;

    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

#[cfg(feature = "desktop")]
pub fn default_webview_data_dir() -> anyhow::Result<std::path::PathBuf> {
    let (qualifier, organization, application) = PROJECT_DIRS;
    let project_dirs = directories::ProjectDirs::from(qualifier, organization, application)
        .ok_or_else(|| anyhow::anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}
