//! Contract Search Component
//!
//! Looks an account up by contract number. The button shows a loading
//! state and is disabled while the request is in flight; Enter in the
//! input triggers the same search.

use leptos::prelude::*;
use leptos::task::spawn_local;
use route_core::{search_account, AccountLookup, CONTRACT_NOT_FOUND, LOOKUP_FALLBACK};

use crate::components::show_error;
use crate::context::use_route_context;
use crate::store::use_route_store;

/// Contract search box
///
/// # Arguments
/// * `on_found` - Called with `(contract, name)` when the account exists
#[component]
pub fn ContractSearch(#[prop(into)] on_found: Callback<(String, String)>) -> impl IntoView {
    let ctx = use_route_context();
    let store = use_route_store();

    let (query, set_query) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (found_name, set_found_name) = signal(None::<String>);

    let search = move || {
        if loading.get_untracked() {
            return;
        }
        let raw = query.get_untracked();
        let controller = ctx.controller();
        set_loading.set(true);
        spawn_local(async move {
            match search_account(controller.transport(), &raw).await {
                Ok(AccountLookup::Found { contract, name }) => {
                    set_query.set(contract.clone());
                    set_found_name.set(Some(name.clone()));
                    on_found.run((contract, name));
                }
                Ok(AccountLookup::NotFound) => {
                    set_found_name.set(None);
                    show_error(store, CONTRACT_NOT_FOUND);
                }
                Err(err) => show_error(store, err.user_message(LOOKUP_FALLBACK)),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="busqueda-contrato">
            <input
                type="text"
                id="busqueda_contrato"
                placeholder="Número de contrato"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        search();
                    }
                }
            />
            <button
                type="button"
                id="buscarContrato"
                class=move || if loading.get() { "btn-buscar loading" } else { "btn-buscar" }
                disabled=move || loading.get()
                on:click=move |_| search()
            >
                "Buscar"
            </button>
            <Show when=move || found_name.get().is_some()>
                <div id="usuarioInfo" class="usuario-info">
                    "Usuario: "
                    <span id="nombreUsuario">{move || found_name.get().unwrap_or_default()}</span>
                </div>
            </Show>
        </div>
    }
}
