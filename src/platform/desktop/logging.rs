use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

pub const LOG_FILE_NAME: &str = "artworks-table.log";

pub fn log_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE_NAME)
}

/// Terminal logger plus a log file in `data_dir`. Falls back to the terminal alone
/// when the file cannot be created.
pub fn init_logging(data_dir: &Path, level: LevelFilter) -> Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    let path = log_file_path(data_dir);
    let file_result = File::create(&path)
        .with_context(|| format!("failed to create log file: {}", path.display()));
    let file_error = match file_result {
        Ok(file) => {
            loggers.push(WriteLogger::new(level, Config::default(), file));
            None
        }
        Err(err) => Some(err),
    };

    CombinedLogger::init(loggers).context("logger already initialized")?;
    if let Some(err) = file_error {
        log::warn!("{err:#}");
    }
    Ok(())
}
