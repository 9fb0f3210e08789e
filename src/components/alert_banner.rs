//! Alert Banner Component
//!
//! Error banners at the top of the route view. Each banner removes itself
//! after a few seconds or when dismissed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_push_banner, store_remove_banner, use_route_store, RouteStore, RouteViewStateStoreFields};

const BANNER_TIMEOUT_MS: u32 = 5_000;

/// Show an error banner that auto-dismisses
pub fn show_error(store: RouteStore, text: impl Into<String>) {
    let id = store_push_banner(&store, text.into());
    spawn_local(async move {
        TimeoutFuture::new(BANNER_TIMEOUT_MS).await;
        store_remove_banner(&store, id);
    });
}

#[component]
pub fn AlertBanner() -> impl IntoView {
    let store = use_route_store();

    view! {
        <div class="alertas">
            <For
                each=move || store.banners().get()
                key=|banner| banner.id
                children=move |banner| {
                    let id = banner.id;
                    view! {
                        <div class="alert alert-danger" role="alert">
                            <span>{banner.text}</span>
                            <button class="alert-close" on:click=move |_| store_remove_banner(&store, id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
