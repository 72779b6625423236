use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::artwork::PageNumber;
use crate::infra::artic::client::ArticClient;
use crate::ui::components::artwork_table::{ArtworkRow, COLUMN_HEADERS};
use crate::ui::components::header_checkbox::{popover_open_after, HeaderCheckbox, PopoverEvent};
use crate::ui::components::paginator::Paginator;
use crate::ui::state::app_state::AppState;
use crate::ui::styles::{
    loading_overlay_style, root_container_style, table_container_style, table_header_cell_style,
    table_style,
};
use crate::usecase::ports::source::PageDataSource;
use crate::usecase::services::selection_service::{apply_selection_event, SelectionEvent};

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::default);
    let AppState {
        mut table,
        mut selection,
        mut toggle_count,
        mut show_toggle_popover,
    } = AppState::new(&config);

    let source_config = config.clone();
    let source = use_hook(move || -> Rc<dyn PageDataSource> {
        Rc::new(ArticClient::new(source_config))
    });

    let load_page = use_callback(move |target: PageNumber| {
        let Some(ticket) = table.write().request_page(target) else {
            return;
        };
        let source = source.clone();
        spawn(async move {
            let result = source.fetch(ticket.page()).await;
            table.write().settle(ticket, result);
        });
    });

    let dispatch = use_callback(move |event: SelectionEvent| {
        let controller = table.read();
        apply_selection_event(
            &mut selection.write(),
            &mut toggle_count.write(),
            controller.records(),
            event,
        );
    });

    use_effect(move || {
        load_page.call(PageNumber::FIRST);
    });

    let controller = table();
    let records = controller.records().to_vec();
    let loading = controller.is_loading();
    let current_page = controller.current_page().get();
    let page_count = controller.page_count(config.page_size);
    let report = controller.page_report(config.page_size);
    let selection_snapshot = selection();
    let header_checked = selection_snapshot.all_selected_on(&records);
    let row_checked = selection_snapshot.selected_on(&records);
    let toggle_snapshot = toggle_count();
    let draft = toggle_snapshot.draft();
    let committed = toggle_snapshot.committed();
    let max_rows = records.len();

    rsx! {
        div {
            style: "{root_container_style()}",
            onclick: move |_| {
                let is_open = show_toggle_popover();
                show_toggle_popover.set(popover_open_after(PopoverEvent::OutsideClicked, is_open));
            },
            h2 { "Artworks Table" }
            div {
                style: "{table_container_style()}",
                if loading {
                    div { style: "{loading_overlay_style()}", "Loading…" }
                }
                table { style: "{table_style()}",
                    thead {
                        tr {
                            th { style: "{table_header_cell_style()}",
                                HeaderCheckbox {
                                    checked: header_checked,
                                    draft: draft,
                                    committed: committed,
                                    max_rows: max_rows,
                                    open: show_toggle_popover,
                                    on_header_click: move |_: ()| dispatch.call(SelectionEvent::HeaderClicked),
                                    on_draft_input: move |raw: String| dispatch.call(SelectionEvent::CountInput(raw)),
                                    on_submit: move |_: ()| dispatch.call(SelectionEvent::CountCommitted),
                                }
                            }
                            for header in COLUMN_HEADERS {
                                th { style: "{table_header_cell_style()}", "{header}" }
                            }
                        }
                    }
                    tbody {
                        {records.iter().zip(row_checked).map(|(record, checked)| {
                            let id = record.id;
                            rsx!(
                                ArtworkRow {
                                    key: "{id}",
                                    record: record.clone(),
                                    checked: checked,
                                    on_change: move |checked: bool| {
                                        dispatch.call(SelectionEvent::RowChanged { id, checked })
                                    },
                                }
                            )
                        })}
                    }
                }
            }
            Paginator {
                current: current_page,
                page_count: page_count,
                window: config.page_link_window,
                report: report,
                on_page: move |index: usize| load_page.call(PageNumber::from_zero_based(index)),
            }
        }
    }
}
