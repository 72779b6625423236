use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::app::App;
use crate::config::AppConfig;
use crate::platform::desktop::logging::init_logging;

pub fn launch(config: &AppConfig) {
    let data_dir = default_data_dir().expect("should resolve and create application data directory");
    if let Err(err) = init_logging(&data_dir, config.log_level) {
        eprintln!("failed to initialize logging: {err:#}");
    }
    let webview_data_dir =
        ensure_webview_data_dir(&data_dir).expect("should create WebView data directory");
    log::info!("starting desktop shell, data dir {}", data_dir.display());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Artworks"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("org", "artworks", "artworks-table")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    let data_dir = project_dirs.data_local_dir().to_path_buf();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data dir: {}", data_dir.display()))?;
    Ok(data_dir)
}
