//! Route View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! writes here through `LeptosRouteView`; components only read.

use leptos::prelude::*;
use reactive_stores::Store;
use route_core::{Progress, TaskItem};

/// Dismissible error banner
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: u32,
    pub text: String,
}

/// Rendered state of the route page
#[derive(Clone, Debug, Default, Store)]
pub struct RouteViewState {
    /// Rows in display order
    pub items: Vec<TaskItem>,
    pub progress: Progress,
    pub finalize_shown: bool,
    /// Finalize request in flight
    pub finalizing: bool,
    /// Rows with a reading request in flight
    pub busy_items: Vec<String>,
    pub banners: Vec<Banner>,
    pub next_banner_id: u32,
    /// Route torn down after finalization
    pub closed: bool,
}

/// Type alias for the store
pub type RouteStore = Store<RouteViewState>;

/// Get the route store from context
pub fn use_route_store() -> RouteStore {
    expect_context::<RouteStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_busy(store: &RouteStore, item_id: &str, busy: bool) {
    let busy_field = store.busy_items();
    let mut busy_items = busy_field.write();
    busy_items.retain(|id| id != item_id);
    if busy {
        busy_items.push(item_id.to_string());
    }
}

/// Add a banner and return its id
pub fn store_push_banner(store: &RouteStore, text: String) -> u32 {
    let id = store.next_banner_id().get_untracked();
    store.next_banner_id().set(id.wrapping_add(1));
    store.banners().write().push(Banner { id, text });
    id
}

pub fn store_remove_banner(store: &RouteStore, banner_id: u32) {
    store.banners().write().retain(|banner| banner.id != banner_id);
}
