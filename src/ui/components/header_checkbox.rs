use dioxus::prelude::*;

use crate::ui::styles::popover_style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverEvent {
    TickClicked,
    Submitted,
    OutsideClicked,
}

/// Open state of the toggle popover after `event`.
pub fn popover_open_after(event: PopoverEvent, open: bool) -> bool {
    match event {
        PopoverEvent::TickClicked => !open,
        PopoverEvent::Submitted | PopoverEvent::OutsideClicked => false,
    }
}

/// Select-all checkbox plus the tick that opens the "rows to toggle" popover.
#[component]
pub fn HeaderCheckbox(
    checked: bool,
    draft: i64,
    committed: i64,
    max_rows: usize,
    mut open: Signal<bool>,
    on_header_click: EventHandler<()>,
    on_draft_input: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let max_rows = max_rows.max(1);

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 2px;",
            input {
                id: "select-all-checkbox",
                r#type: "checkbox",
                checked: checked,
                onclick: move |_| on_header_click.call(()),
            }
            span {
                style: "font-size: 16px; margin-left: 2px; cursor: pointer; color: black;",
                title: "Toggle rows",
                onclick: move |event| {
                    event.stop_propagation();
                    let is_open = open();
                    open.set(popover_open_after(PopoverEvent::TickClicked, is_open));
                },
                "✓"
            }
            if open() {
                div {
                    style: "{popover_style()}",
                    onclick: move |event| event.stop_propagation(),
                    label { r#for: "rows", "Number of Rows to Toggle:" }
                    input {
                        id: "rows",
                        r#type: "number",
                        value: "{draft}",
                        min: "1",
                        max: "{max_rows}",
                        oninput: move |event| on_draft_input.call(event.value()),
                    }
                    button {
                        onclick: move |_| {
                            on_submit.call(());
                            let is_open = open();
                            open.set(popover_open_after(PopoverEvent::Submitted, is_open));
                        },
                        "Submit"
                    }
                    small { style: "color: #666;", "Last toggled: {committed}" }
                }
            }
        }
    }
}
