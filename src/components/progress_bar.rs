//! Progress Bar Component

use leptos::prelude::*;

use crate::store::{use_route_store, RouteViewStateStoreFields};

#[component]
pub fn ProgressBar() -> impl IntoView {
    let store = use_route_store();

    view! {
        <div class="progreso">
            <div class="progreso-contenedor">
                <div class="progreso-barra" style:width=move || store.progress().get().bar_width()></div>
            </div>
            <p class="progreso-texto">{move || store.progress().get().label()}</p>
        </div>
    }
}
