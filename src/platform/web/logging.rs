use crate::config::AppConfig;

/// Routes `log` records to the browser console and panics to `console.error`.
pub fn init_logging(config: &AppConfig) {
    console_error_panic_hook::set_once();
    let Some(level) = config.max_level() else {
        return;
    };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("console logger not installed: {err}");
    }
}
