use crate::domain::entities::artwork::{ArtworkId, ArtworkRecord};
use crate::domain::entities::selection::SelectionStore;
use crate::domain::entities::toggle_count::ToggleCountInput;

/// Checkbox and popover events coming back from the table widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    RowChanged { id: ArtworkId, checked: bool },
    #[allow(dead_code)]
    HeaderChanged { checked: bool },
    HeaderClicked,
    CountInput(String),
    CountCommitted,
}

/// Applies one event against the currently loaded records.
pub fn apply_selection_event(
    selection: &mut SelectionStore,
    toggle_count: &mut ToggleCountInput,
    current_page: &[ArtworkRecord],
    event: SelectionEvent,
) {
    match event {
        SelectionEvent::RowChanged { id, checked } => selection.set_selected(id, checked),
        SelectionEvent::HeaderChanged { checked } => {
            selection.set_all_selected(checked, current_page)
        }
        SelectionEvent::HeaderClicked => {
            let checked = selection.header_click_target(current_page);
            selection.set_all_selected(checked, current_page)
        }
        SelectionEvent::CountInput(raw) => toggle_count.set_draft(&raw),
        SelectionEvent::CountCommitted => {
            let count = toggle_count.commit(current_page.len());
            selection.toggle_first_n(count, current_page);
        }
    }
}
