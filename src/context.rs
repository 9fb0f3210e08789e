//! Route Context
//!
//! Per-view controller handle provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use route_core::{HttpTransport, RouteConfig, RouteController};

use crate::browser::DocumentCookies;
use crate::view::LeptosRouteView;

pub type PageController = RouteController<HttpTransport<DocumentCookies>, LeptosRouteView>;

#[derive(Clone, Copy)]
pub struct RouteContext {
    /// One controller per route view; not `Send`, so kept in local storage
    controller: StoredValue<Rc<PageController>, LocalStorage>,
    pub config: StoredValue<RouteConfig>,
}

impl RouteContext {
    pub fn new(controller: Rc<PageController>, config: RouteConfig) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            config: StoredValue::new(config),
        }
    }

    pub fn controller(&self) -> Rc<PageController> {
        self.controller.get_value()
    }
}

pub fn use_route_context() -> RouteContext {
    expect_context::<RouteContext>()
}
