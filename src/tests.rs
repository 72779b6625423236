use std::cell::RefCell;
use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::domain::entities::artwork::{ArtworkId, ArtworkRecord, Page, PageNumber};
use crate::domain::entities::selection::SelectionStore;
use crate::domain::entities::toggle_count::ToggleCountInput;
use crate::ui::components::artwork_table::{row_cells, COLUMN_HEADERS};
use crate::ui::components::header_checkbox::{popover_open_after, PopoverEvent};
use crate::ui::components::paginator::{nav_bounds, page_links};
use crate::ui::styles::{
    loading_overlay_style, row_style, table_container_style, table_header_cell_style,
};
use crate::usecase::ports::source::{FetchError, PageDataSource};
use crate::usecase::services::selection_service::{apply_selection_event, SelectionEvent};
use crate::usecase::services::table_controller::{SettleOutcome, TableController};

/// Serves ten consecutive ids per page; pages listed in `failing` answer with HTTP 500.
struct ScriptedSource {
    total: u64,
    failing: BTreeSet<u32>,
    calls: RefCell<Vec<u32>>,
}

impl ScriptedSource {
    fn new(total: u64) -> Self {
        Self {
            total,
            failing: BTreeSet::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn failing_on(mut self, page: u32) -> Self {
        self.failing.insert(page);
        self
    }
}

#[async_trait(?Send)]
impl PageDataSource for ScriptedSource {
    async fn fetch(&self, page: PageNumber) -> Result<Page, FetchError> {
        self.calls.borrow_mut().push(page.get());
        if self.failing.contains(&page.get()) {
            return Err(FetchError::Status { status: 500 });
        }
        let first = i64::from(page.get() - 1) * 10 + 1;
        let records = (first..first + 10).map(ArtworkRecord::new).collect();
        Ok(Page::new(page, records, self.total))
    }
}

struct Harness {
    controller: TableController,
    selection: SelectionStore,
    toggle_count: ToggleCountInput,
}

impl Harness {
    fn new() -> Self {
        Self {
            controller: TableController::new(),
            selection: SelectionStore::new(),
            toggle_count: ToggleCountInput::default(),
        }
    }

    async fn go_to(&mut self, source: &ScriptedSource, page: u32) -> SettleOutcome {
        let target = PageNumber::new(page).expect("page should be positive");
        self.controller
            .load(source, target)
            .await
            .expect("fetch should be issued")
    }

    fn send(&mut self, event: SelectionEvent) {
        apply_selection_event(
            &mut self.selection,
            &mut self.toggle_count,
            self.controller.records(),
            event,
        );
    }

    fn visible_selection(&self) -> Vec<bool> {
        self.selection.selected_on(self.controller.records())
    }
}

#[tokio::test]
async fn mount_loads_first_page() {
    let source = ScriptedSource::new(125);
    let mut harness = Harness::new();

    let outcome = harness.go_to(&source, 1).await;

    assert_eq!(outcome, SettleOutcome::Applied);
    assert_eq!(harness.controller.records().len(), 10);
    assert_eq!(harness.controller.total_records(), 125);
    assert_eq!(harness.controller.current_page(), PageNumber::FIRST);
    assert!(!harness.controller.is_loading());
    assert_eq!(*source.calls.borrow(), vec![1]);
}

#[tokio::test]
async fn selection_survives_pagination() {
    let source = ScriptedSource::new(125);
    let mut harness = Harness::new();
    harness.go_to(&source, 1).await;

    harness.send(SelectionEvent::RowChanged {
        id: ArtworkId(3),
        checked: true,
    });
    harness.go_to(&source, 2).await;
    assert_eq!(harness.controller.records()[0].id, ArtworkId(11));
    assert_eq!(harness.visible_selection(), vec![false; 10]);
    harness.go_to(&source, 1).await;

    assert!(harness.selection.is_selected(ArtworkId(3)));
    assert_eq!(
        harness.visible_selection(),
        vec![false, false, true, false, false, false, false, false, false, false]
    );
}

#[tokio::test]
async fn select_all_is_scoped_to_loaded_page() {
    let source = ScriptedSource::new(125);
    let mut harness = Harness::new();
    harness.go_to(&source, 1).await;

    harness.send(SelectionEvent::HeaderChanged { checked: true });

    assert!(harness.selection.all_selected_flag());
    assert!((1..=10).all(|id| harness.selection.is_selected(ArtworkId(id))));

    harness.go_to(&source, 2).await;

    assert!(!harness.selection.is_selected(ArtworkId(11)));
    assert!(harness.selection.all_selected_flag());
    assert!(!harness.selection.all_selected_on(harness.controller.records()));
}

#[tokio::test]
async fn header_click_on_fully_selected_page_deselects_it() {
    let source = ScriptedSource::new(125);
    let mut harness = Harness::new();
    harness.go_to(&source, 1).await;
    harness.send(SelectionEvent::HeaderClicked);
    assert!(harness.selection.all_selected_on(harness.controller.records()));

    harness.send(SelectionEvent::HeaderClicked);

    assert_eq!(harness.visible_selection(), vec![false; 10]);
}

#[tokio::test]
async fn header_click_after_unchecking_one_row_reselects_all() {
    let source = ScriptedSource::new(125);
    let mut harness = Harness::new();
    harness.go_to(&source, 1).await;
    harness.send(SelectionEvent::HeaderClicked);
    harness.send(SelectionEvent::RowChanged {
        id: ArtworkId(4),
        checked: false,
    });
    assert!(!harness.selection.all_selected_on(harness.controller.records()));

    harness.send(SelectionEvent::HeaderClicked);

    assert_eq!(harness.visible_selection(), vec![true; 10]);
}

#[tokio::test]
async fn newer_page_request_supersedes_pending_one() {
    let source = ScriptedSource::new(125);
    let mut harness = Harness::new();
    harness.go_to(&source, 1).await;

    let second = harness
        .controller
        .request_page(PageNumber::from_zero_based(1))
        .expect("page 2 should be requested");
    assert!(harness.controller.is_loading());
    let third = harness
        .controller
        .request_page(PageNumber::from_zero_based(2))
        .expect("page 3 should be requested while page 2 is loading");

    let third_result = source.fetch(third.page()).await;
    let second_result = source.fetch(second.page()).await;
    assert_eq!(
        harness.controller.settle(third, third_result),
        SettleOutcome::Applied
    );
    assert_eq!(
        harness.controller.settle(second, second_result),
        SettleOutcome::Superseded
    );

    assert_eq!(harness.controller.current_page().get(), 3);
    assert_eq!(harness.controller.records()[0].id, ArtworkId(21));
    assert!(!harness.controller.is_loading());
}

#[tokio::test]
async fn failed_fetch_keeps_page_and_clears_loading() {
    let source = ScriptedSource::new(125).failing_on(2);
    let mut harness = Harness::new();
    harness.go_to(&source, 1).await;
    let before = harness.controller.page().clone();

    let outcome = harness.go_to(&source, 2).await;

    assert_eq!(outcome, SettleOutcome::Failed);
    assert_eq!(harness.controller.page(), &before);
    assert_eq!(harness.controller.total_records(), 125);
    assert_eq!(harness.controller.current_page(), PageNumber::FIRST);
    assert!(!harness.controller.is_loading());
}

#[tokio::test]
async fn failed_fetch_leaves_selection_untouched() {
    let source = ScriptedSource::new(125).failing_on(3);
    let mut harness = Harness::new();
    harness.go_to(&source, 1).await;
    harness.send(SelectionEvent::HeaderChanged { checked: true });
    let before = harness.selection.clone();

    harness.go_to(&source, 3).await;

    assert_eq!(harness.selection, before);
}

#[tokio::test]
async fn non_numeric_count_toggles_first_row_only() {
    let source = ScriptedSource::new(125);
    let mut harness = Harness::new();
    harness.go_to(&source, 1).await;
    harness.send(SelectionEvent::RowChanged {
        id: ArtworkId(2),
        checked: true,
    });

    harness.send(SelectionEvent::CountInput("abc".to_string()));
    assert_eq!(harness.toggle_count.draft(), 1);
    harness.send(SelectionEvent::CountCommitted);

    assert_eq!(harness.toggle_count.committed(), 1);
    assert_eq!(
        harness.visible_selection(),
        vec![true, true, false, false, false, false, false, false, false, false]
    );
}

#[tokio::test]
async fn committing_same_count_twice_restores_rows() {
    let source = ScriptedSource::new(125);
    let mut harness = Harness::new();
    harness.go_to(&source, 1).await;
    harness.send(SelectionEvent::RowChanged {
        id: ArtworkId(5),
        checked: true,
    });
    let before = harness.visible_selection();

    harness.send(SelectionEvent::CountInput("7".to_string()));
    harness.send(SelectionEvent::CountCommitted);
    assert_ne!(harness.visible_selection(), before);
    harness.send(SelectionEvent::CountCommitted);

    assert_eq!(harness.visible_selection(), before);
}

#[tokio::test]
async fn oversized_count_is_clamped_to_loaded_rows() {
    let source = ScriptedSource::new(125);
    let mut harness = Harness::new();
    harness.go_to(&source, 1).await;

    harness.send(SelectionEvent::CountInput("40".to_string()));
    harness.send(SelectionEvent::CountCommitted);

    assert_eq!(harness.toggle_count.committed(), 10);
    assert!(harness.selection.all_selected_on(harness.controller.records()));
    assert!(!harness.selection.is_selected(ArtworkId(11)));
}

#[test]
fn page_links_stay_inside_page_range() {
    assert_eq!(page_links(1, 100, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_links(50, 100, 5), vec![48, 49, 50, 51, 52]);
    assert_eq!(page_links(100, 100, 5), vec![96, 97, 98, 99, 100]);
    assert_eq!(page_links(2, 3, 5), vec![1, 2, 3]);
    assert_eq!(page_links(1, 0, 5), vec![1]);
}

#[test]
fn edge_buttons_disable_only_at_bounds() {
    assert_eq!(nav_bounds(1, 13), (true, false));
    assert_eq!(nav_bounds(7, 13), (false, false));
    assert_eq!(nav_bounds(13, 13), (false, true));
    assert_eq!(nav_bounds(1, 1), (true, true));
    assert_eq!(nav_bounds(1, 0), (true, true));
}

#[test]
fn popover_closes_on_submit_and_outside_click() {
    assert!(popover_open_after(PopoverEvent::TickClicked, false));
    assert!(!popover_open_after(PopoverEvent::TickClicked, true));
    assert!(!popover_open_after(PopoverEvent::Submitted, true));
    assert!(!popover_open_after(PopoverEvent::OutsideClicked, true));
    assert!(!popover_open_after(PopoverEvent::OutsideClicked, false));
}

#[test]
fn loading_overlay_lets_clicks_through() {
    let style = loading_overlay_style();

    assert!(style.contains("pointer-events: none"));
    assert!(style.contains("position: absolute"));
}

#[test]
fn row_cells_follow_column_order_and_blank_missing_values() {
    let record = ArtworkRecord {
        title: Some("Nighthawks".to_string()),
        artist_display: Some("Edward Hopper".to_string()),
        date_start: Some(1942),
        date_end: Some(1942),
        ..ArtworkRecord::new(111628)
    };

    let cells = row_cells(&record);

    assert_eq!(cells.len(), COLUMN_HEADERS.len());
    assert_eq!(
        cells,
        [
            "Nighthawks".to_string(),
            String::new(),
            "Edward Hopper".to_string(),
            String::new(),
            "1942".to_string(),
            "1942".to_string(),
        ]
    );
}

#[test]
fn sticky_header_styles_include_positioning() {
    let style = table_header_cell_style();

    assert!(style.contains("position: sticky"));
    assert!(style.contains("top: 0"));
}

#[test]
fn table_container_style_allows_scroll() {
    assert!(table_container_style().contains("overflow: auto"));
}

#[test]
fn selected_rows_are_highlighted() {
    assert!(row_style(true).contains("background"));
    assert!(row_style(false).is_empty());
}

#[test]
fn default_config_uses_fixed_page_size() {
    let config = AppConfig::default();

    assert_eq!(config.page_size, 10);
    assert_eq!(config.default_toggle_count, 1);
    assert!(config
        .artworks_url(PageNumber::FIRST)
        .contains("limit=10"));
}
