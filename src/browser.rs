//! Browser Adapters
//!
//! Thin wrappers over `window` used by the route view.

use route_core::HeaderProvider;
use wasm_bindgen::JsCast;

/// Reads `document.cookie` on every call so a rotated token is picked up
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl HeaderProvider for DocumentCookies {
    fn cookies(&self) -> String {
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }
}

pub fn csrf_token(cookie_name: &str) -> Option<String> {
    DocumentCookies.csrf_token(cookie_name)
}

/// Blocking yes/no dialog; a missing window counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn navigate(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href(url) {
            log::error!("[BROWSER] navigation to {} failed: {:?}", url, e);
        }
    }
}

pub fn reload() {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().reload() {
            log::error!("[BROWSER] reload failed: {:?}", e);
        }
    }
}

/// `window.location.origin`, used as the transport base URL
pub fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
