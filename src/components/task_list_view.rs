//! Task List View Component
//!
//! Reorderable list of route rows. Uses leptos-dragdrop for the gesture;
//! the controller owns the order and redraws the rows as samples arrive.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::TaskRow;
use crate::context::use_route_context;
use crate::store::{use_route_store, RouteViewStateStoreFields};

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_route_context();
    let store = use_route_store();

    let dnd = create_dnd_signals();

    bind_global_drag_handlers(
        dnd,
        move |item_id| {
            if !ctx.controller().begin_drag(&item_id) {
                end_drag(&dnd);
            }
        },
        move |dragged| {
            if dragged.is_some() {
                let order = ctx.controller().end_drag();
                log::debug!("[DND] order now {}", order.join(","));
            }
        },
    );

    view! {
        <ul class="usuarios-ruta-lista">
            <For
                each=move || store.items().get()
                // completed is part of the key so the row swaps its form for the marker
                key=|item| (item.id.clone(), item.completed)
                children=move |item| view! { <TaskRow item=item dnd=dnd /> }
            />
        </ul>
    }
}
