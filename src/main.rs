mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use crate::app::App;

fn main() {
    config::init_logging();
    launch();
}

#[cfg(feature = "desktop")]
fn launch() {
    let desktop_config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title(config::APP_TITLE));
    let desktop_config = match config::default_webview_data_dir() {
        Ok(webview_data_dir) => desktop_config.with_data_directory(webview_data_dir),
        Err(err) => {
            tracing::warn!("using default webview data dir: {err:#}");
            desktop_config
        }
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(App);
}
