use std::collections::HashMap;

use crate::domain::entities::artwork::{ArtworkId, ArtworkRecord};

/// Selection keyed by artwork id. Entries survive page changes and are never
/// pruned; a missing entry reads as unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: HashMap<ArtworkId, bool>,
    all_selected: bool,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selected.get(&id).copied().unwrap_or(false)
    }

    pub fn set_selected(&mut self, id: ArtworkId, selected: bool) {
        self.selected.insert(id, selected);
    }

    /// Only the records passed in are touched; other pages keep their state.
    pub fn set_all_selected(&mut self, selected: bool, current_page: &[ArtworkRecord]) {
        self.all_selected = selected;
        for record in current_page {
            self.selected.insert(record.id, selected);
        }
        log::debug!(
            "bulk selection set to {selected} for {} records",
            current_page.len()
        );
    }

    /// Flips each of the first `n` records against its own prior state.
    /// Returns how many records were toggled.
    pub fn toggle_first_n(&mut self, n: i64, current_page: &[ArtworkRecord]) -> usize {
        if n <= 0 {
            return 0;
        }
        let count = usize::try_from(n)
            .unwrap_or(usize::MAX)
            .min(current_page.len());

        let flipped: Vec<(ArtworkId, bool)> = current_page[..count]
            .iter()
            .map(|record| (record.id, !self.is_selected(record.id)))
            .collect();
        for (id, next) in flipped {
            self.selected.insert(id, next);
        }
        log::debug!("toggled first {count} records");
        count
    }

    /// Value recorded by the last bulk action. Not kept in sync with row toggles.
    #[allow(dead_code)]
    pub fn all_selected_flag(&self) -> bool {
        self.all_selected
    }

    pub fn all_selected_on(&self, records: &[ArtworkRecord]) -> bool {
        !records.is_empty() && records.iter().all(|record| self.is_selected(record.id))
    }

    /// A header click selects the page unless every loaded row is already selected.
    pub fn header_click_target(&self, records: &[ArtworkRecord]) -> bool {
        !self.all_selected_on(records)
    }

    pub fn selected_on(&self, records: &[ArtworkRecord]) -> Vec<bool> {
        records
            .iter()
            .map(|record| self.is_selected(record.id))
            .collect()
    }
}
