//! Page Snapshot
//!
//! The server renders the route as JSON inside
//! `<script id="ruta-data" type="application/json">`.

use route_core::PageSnapshot;

pub const SNAPSHOT_ELEMENT_ID: &str = "ruta-data";

pub fn load_page_snapshot() -> Result<PageSnapshot, String> {
    let doc = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| "no document".to_string())?;
    let element = doc
        .get_element_by_id(SNAPSHOT_ELEMENT_ID)
        .ok_or_else(|| format!("missing #{} element", SNAPSHOT_ELEMENT_ID))?;
    parse_snapshot(&element.text_content().unwrap_or_default())
}

pub fn parse_snapshot(raw: &str) -> Result<PageSnapshot, String> {
    PageSnapshot::from_json(raw.trim()).map_err(|e| format!("invalid route data: {}", e))
}
