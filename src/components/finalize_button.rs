//! Finalize Button Component
//!
//! Appears once every reading is in. Disabled while the finalize request
//! is in flight so it cannot be sent twice.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_route_context;
use crate::store::{use_route_store, RouteViewStateStoreFields};

#[component]
pub fn FinalizeButton() -> impl IntoView {
    let ctx = use_route_context();
    let store = use_route_store();

    let on_click = move |_| {
        if store.finalizing().get_untracked() {
            return;
        }
        let controller = ctx.controller();
        spawn_local(async move {
            // failures are already shown by the controller
            let _ = controller.on_finalize_requested().await;
        });
    };

    view! {
        <Show when=move || store.finalize_shown().get()>
            <div class="finalizar-ruta">
                <button
                    class="btn-finalizar"
                    disabled=move || store.finalizing().get()
                    on:click=on_click
                >
                    {move || if store.finalizing().get() { "Finalizando..." } else { "Finalizar Ruta" }}
                </button>
            </div>
        </Show>
    }
}
