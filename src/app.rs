//! Route Page App
//!
//! Builds the controller for the route rendered into the page and lays out
//! banners, progress, the reorderable list and the finalize control.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use route_core::{HttpTransport, PageSnapshot, RouteController};

use crate::browser::{self, DocumentCookies};
use crate::components::{AlertBanner, FinalizeButton, ProgressBar, RouteEditForm, TaskListView};
use crate::context::RouteContext;
use crate::snapshot::load_page_snapshot;
use crate::store::{RouteViewState, RouteViewStateStoreFields};
use crate::view::LeptosRouteView;

#[component]
pub fn App() -> impl IntoView {
    let PageSnapshot { route, mut config } = match load_page_snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::error!("[APP] {}", e);
            return view! { <p class="ruta-error">"No se pudo cargar la ruta"</p> }.into_any();
        }
    };
    if config.base_url.is_empty() {
        if let Some(origin) = browser::origin() {
            config.base_url = origin;
        }
    }
    log::info!("[APP] route {} with {} items", route.id, route.items.len());

    let store = Store::new(RouteViewState::default());
    let route_id = route.id.clone();
    let edit_action = config.edit_action.clone();

    let transport = HttpTransport::new(config.clone(), DocumentCookies);
    let controller = Rc::new(RouteController::new(route, transport, LeptosRouteView::new(store)));

    provide_context(store);
    provide_context(RouteContext::new(controller.clone(), config));
    controller.mount();

    view! {
        <div class="ruta-activa" data-ruta-id=route_id>
            <AlertBanner />
            <Show
                when=move || !store.closed().get()
                fallback=|| view! { <p class="ruta-cerrada">"Ruta finalizada"</p> }
            >
                {edit_action.clone().map(|action| view! { <RouteEditForm action=action /> })}
                <ProgressBar />
                <TaskListView />
                <FinalizeButton />
            </Show>
        </div>
    }
    .into_any()
}
