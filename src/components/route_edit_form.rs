//! Route Edit Form Component
//!
//! Native form post carrying the route name, the current visiting order
//! and optionally one more account picked through the contract search.
//! Validation runs on submit; an invalid draft never leaves the page.

use leptos::prelude::*;
use route_core::RouteDraft;

use crate::browser;
use crate::components::{show_error, ContractSearch};
use crate::context::use_route_context;
use crate::store::{use_route_store, RouteViewStateStoreFields};

#[component]
pub fn RouteEditForm(action: String) -> impl IntoView {
    let ctx = use_route_context();
    let store = use_route_store();

    let (name, set_name) = signal(String::new());
    let (contract, set_contract) = signal(String::new());

    let csrf = ctx
        .config
        .with_value(|config| browser::csrf_token(&config.csrf_cookie))
        .unwrap_or_default();

    let order_field = move || {
        store
            .items()
            .read()
            .iter()
            .map(|item| item.id.as_str())
            .collect::<Vec<_>>()
            .join(",")
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        let draft = RouteDraft::new(name.get_untracked(), ctx.controller().current_order());
        if let Err(err) = draft.validate() {
            ev.prevent_default();
            show_error(store, err.user_message(""));
        }
    };

    view! {
        <form id="rutaForm" class="ruta-form" method="post" action=action on:submit=on_submit>
            <input type="hidden" name="csrfmiddlewaretoken" value=csrf />
            <input
                type="text"
                id="nombre_ruta"
                name="nombre_ruta"
                placeholder="Nombre de la ruta"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <ContractSearch on_found=move |(found, _name): (String, String)| set_contract.set(found) />
            <input type="hidden" name="contrato" prop:value=move || contract.get() />
            <input type="hidden" name="orden_usuarios" prop:value=order_field />
            <button type="submit" class="btn-guardar-ruta">"Guardar ruta"</button>
        </form>
    }
}
