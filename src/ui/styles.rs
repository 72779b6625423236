pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; gap: 8px; padding: 12px; box-sizing: border-box; font-family: sans-serif;"
}

pub fn table_container_style() -> &'static str {
    "position: relative; flex: 1 1 auto; min-height: 0; overflow: auto; border: 1px solid #bbb; border-radius: 6px;"
}

pub fn table_style() -> &'static str {
    "border-collapse: collapse; width: 100%; background: #fff;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 2; background: #f4f4f4; border: 1px solid #bbb; padding: 6px; text-align: left; white-space: nowrap;"
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px 6px; vertical-align: top;"
}

pub fn checkbox_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px; text-align: center; width: 64px;"
}

pub fn row_style(selected: bool) -> &'static str {
    if selected {
        "background: #eef4ff;"
    } else {
        ""
    }
}

pub fn loading_overlay_style() -> &'static str {
    "position: absolute; inset: 0; z-index: 5; pointer-events: none; display: flex; align-items: center; justify-content: center; background: rgba(255,255,255,0.6); font-weight: bold;"
}

pub fn popover_style() -> &'static str {
    "position: absolute; left: 0; top: 28px; z-index: 10; min-width: 220px; display: flex; flex-direction: column; gap: 6px; padding: 10px; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); font-weight: normal;"
}

pub fn paginator_style() -> &'static str {
    "display: flex; gap: 6px; align-items: center; flex-wrap: wrap; padding: 8px 0;"
}

pub fn page_button_style(active: bool) -> &'static str {
    if active {
        "border: 1px solid #3b6fd8; background: #eef4ff; padding: 4px 10px; border-radius: 6px; font-weight: bold;"
    } else {
        "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    }
}
