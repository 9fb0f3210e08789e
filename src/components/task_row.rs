//! Task Row Component
//!
//! One account in the route: label plus either the reading form or the
//! "reading saved" marker.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_item_mousemove, make_on_mousedown, DndSignals};
use route_core::TaskItem;

use crate::context::use_route_context;
use crate::store::{use_route_store, RouteViewStateStoreFields};

#[component]
pub fn TaskRow(item: TaskItem, dnd: DndSignals) -> impl IntoView {
    let ctx = use_route_context();

    let id = item.id.clone();
    let completed = item.completed;

    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mousemove = make_on_item_mousemove(dnd, id.clone(), move |target, offset_y, height| {
        ctx.controller().drag_over(target, offset_y, height);
    });

    let dragging = {
        let id = id.clone();
        Signal::derive(move || dnd.is_dragging(&id))
    };
    let row_class = move || {
        let mut c = String::from("usuario-ruta-item");
        if completed {
            c.push_str(" completado");
        }
        if dragging.get() {
            c.push_str(" dragging");
        }
        c
    };

    view! {
        <li
            class=row_class
            id=format!("usuario-{}", id)
            data-id=id.clone()
            style:opacity=move || if dragging.get() { "0.5" } else { "1" }
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
        >
            <span class="usuario-nombre">{item.label}</span>
            <div class="lectura-container">
                {if completed {
                    view! { <span class="lectura-completada">"Lectura registrada"</span> }.into_any()
                } else {
                    view! { <ReadingForm item_id=id.clone() /> }.into_any()
                }}
            </div>
        </li>
    }
}

#[component]
fn ReadingForm(item_id: String) -> impl IntoView {
    let ctx = use_route_context();
    let store = use_route_store();

    let (reading, set_reading) = signal(String::new());
    let busy = {
        let id = item_id.clone();
        Signal::derive(move || store.busy_items().read().contains(&id))
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let id = item_id.clone();
        let value = reading.get_untracked();
        let controller = ctx.controller();
        spawn_local(async move {
            // errors are surfaced by the controller; the form stays usable
            let _ = controller.on_reading_submitted(&id, &value).await;
        });
    };

    view! {
        <form class="lectura-form" on:submit=submit>
            <input
                type="number"
                step="any"
                name="lectura"
                placeholder="Lectura"
                required
                disabled=move || busy.get()
                prop:value=move || reading.get()
                on:input=move |ev| set_reading.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class=move || if busy.get() { "btn-guardar submitting" } else { "btn-guardar" }
                disabled=move || busy.get()
            >
                {move || if busy.get() { "Guardando..." } else { "Guardar" }}
            </button>
        </form>
    }
}
