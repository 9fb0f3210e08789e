//! Leptos Route View
//!
//! `RouteView` implementation: controller side effects become store writes
//! and browser calls.

use leptos::prelude::*;
use route_core::{Notice, NoticeLevel, Progress, RouteView, TaskItem};

use crate::browser;
use crate::components::show_error;
use crate::store::{store_set_busy, RouteStore, RouteViewStateStoreFields};

#[derive(Clone, Copy)]
pub struct LeptosRouteView {
    store: RouteStore,
}

impl LeptosRouteView {
    pub fn new(store: RouteStore) -> Self {
        Self { store }
    }
}

impl RouteView for LeptosRouteView {
    fn render_items(&self, items: &[TaskItem]) {
        self.store.items().set(items.to_vec());
    }

    fn render_progress(&self, progress: &Progress) {
        self.store.progress().set(*progress);
    }

    fn show_finalize_control(&self) {
        self.store.finalize_shown().set(true);
    }

    fn set_item_busy(&self, item_id: &str, busy: bool) {
        store_set_busy(&self.store, item_id, busy);
    }

    fn set_finalize_busy(&self, busy: bool) {
        self.store.finalizing().set(busy);
    }

    fn notify(&self, notice: Notice) {
        match notice.level {
            // blocking, so it is read before the page navigates away
            NoticeLevel::Success => browser::alert(&notice.text),
            NoticeLevel::Error => show_error(self.store, notice.text),
        }
    }

    fn confirm(&self, question: &str) -> bool {
        browser::confirm(question)
    }

    fn navigate(&self, url: &str) {
        browser::navigate(url);
    }

    fn reload(&self) {
        browser::reload();
    }

    fn close_route(&self) {
        self.store.closed().set(true);
    }
}
