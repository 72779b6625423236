use dioxus::prelude::{use_signal, Signal};

use crate::config::AppConfig;
use crate::domain::entities::selection::SelectionStore;
use crate::domain::entities::toggle_count::ToggleCountInput;
use crate::usecase::services::table_controller::TableController;

pub struct AppState {
    pub table: Signal<TableController>,
    pub selection: Signal<SelectionStore>,
    pub toggle_count: Signal<ToggleCountInput>,
    pub show_toggle_popover: Signal<bool>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let default_toggle_count = config.default_toggle_count;
        Self {
            table: use_signal(TableController::new),
            selection: use_signal(SelectionStore::new),
            toggle_count: use_signal(move || ToggleCountInput::new(default_toggle_count)),
            show_toggle_popover: use_signal(|| false),
        }
    }
}
