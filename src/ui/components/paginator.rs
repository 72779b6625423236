use dioxus::prelude::*;

use crate::ui::styles::{page_button_style, paginator_style};

/// Numbered links around `current`, at most `window` of them, kept inside `[1, page_count]`.
pub fn page_links(current: u32, page_count: u32, window: u32) -> Vec<u32> {
    let page_count = page_count.max(1);
    let window = window.clamp(1, page_count);
    let current = current.clamp(1, page_count);

    let mut start = current.saturating_sub(window / 2).max(1);
    let mut end = start + window - 1;
    if end > page_count {
        end = page_count;
        start = end + 1 - window;
    }
    (start..=end).collect()
}

/// `(on_first, on_last)` for the edge buttons. Paging stays enabled while a fetch is in
/// flight; a newer request supersedes the pending one.
pub fn nav_bounds(current: u32, page_count: u32) -> (bool, bool) {
    let page_count = page_count.max(1);
    (current <= 1, current >= page_count)
}

/// Emits zero-based page indexes through `on_page`.
#[component]
pub fn Paginator(
    current: u32,
    page_count: u32,
    window: u32,
    report: String,
    on_page: EventHandler<usize>,
) -> Element {
    let page_count = page_count.max(1);
    let (on_first, on_last) = nav_bounds(current, page_count);
    let last_index = (page_count - 1) as usize;
    let prev_index = current.saturating_sub(2) as usize;
    let next_index = current as usize;

    rsx! {
        div {
            style: "{paginator_style()}",
            span { "{report}" }
            button {
                style: "{page_button_style(false)}",
                disabled: on_first,
                onclick: move |_| on_page.call(0),
                "«"
            }
            button {
                style: "{page_button_style(false)}",
                disabled: on_first,
                onclick: move |_| on_page.call(prev_index),
                "‹"
            }
            {page_links(current, page_count, window).into_iter().map(|link| {
                let is_current = link == current;
                rsx!(
                    button {
                        key: "{link}",
                        style: "{page_button_style(is_current)}",
                        disabled: is_current,
                        onclick: move |_| on_page.call((link - 1) as usize),
                        "{link}"
                    }
                )
            })}
            button {
                style: "{page_button_style(false)}",
                disabled: on_last,
                onclick: move |_| on_page.call(next_index),
                "›"
            }
            button {
                style: "{page_button_style(false)}",
                disabled: on_last,
                onclick: move |_| on_page.call(last_index),
                "»"
            }
        }
    }
}
