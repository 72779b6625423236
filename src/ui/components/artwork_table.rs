use dioxus::prelude::*;

use crate::domain::entities::artwork::ArtworkRecord;
use crate::ui::styles::{checkbox_cell_style, row_style, table_cell_style};

pub const COLUMN_HEADERS: [&str; 6] = [
    "Title",
    "Place of Origin",
    "Artist Display",
    "Inscriptions",
    "Date Start",
    "Date End",
];

/// Display text for each data column, in `COLUMN_HEADERS` order. Missing values render empty.
pub fn row_cells(record: &ArtworkRecord) -> [String; 6] {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let year = |value: Option<i64>| value.map(|year| year.to_string()).unwrap_or_default();
    [
        text(&record.title),
        text(&record.place_of_origin),
        text(&record.artist_display),
        text(&record.inscriptions),
        year(record.date_start),
        year(record.date_end),
    ]
}

#[component]
pub fn ArtworkRow(record: ArtworkRecord, checked: bool, on_change: EventHandler<bool>) -> Element {
    let cells = row_cells(&record);
    let checkbox_id = format!("checkbox-{}", record.id);

    rsx! {
        tr {
            style: "{row_style(checked)}",
            td {
                style: "{checkbox_cell_style()}",
                input {
                    id: "{checkbox_id}",
                    r#type: "checkbox",
                    checked: checked,
                    onclick: move |_| on_change.call(!checked),
                }
            }
            for cell in cells {
                td { style: "{table_cell_style()}", "{cell}" }
            }
        }
    }
}
