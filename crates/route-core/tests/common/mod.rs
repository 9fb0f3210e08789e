//! Shared test doubles: a scripted transport and a recording view.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use route_core::transport::{ReadingAccepted, RouteFinalized};
use route_core::{
    AccountLookup, Notice, NoticeLevel, Progress, Route, RouteController, RouteTransport, RouteView, TaskItem,
    TransportError,
};
use tokio::sync::oneshot;

// ========================
// Transport
// ========================

#[derive(Default)]
pub struct FakeTransport {
    readings: RefCell<HashMap<String, VecDeque<Result<ReadingAccepted, TransportError>>>>,
    finalizes: RefCell<VecDeque<Result<RouteFinalized, TransportError>>>,
    lookups: RefCell<VecDeque<Result<AccountLookup, TransportError>>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    finalize_gate: RefCell<Option<oneshot::Receiver<()>>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reading_ok(self, account_id: &str) -> Self {
        self.push_reading(
            account_id,
            Ok(ReadingAccepted {
                message: "Lectura guardada".to_string(),
            }),
        )
    }

    pub fn reading_err(self, account_id: &str, message: &str) -> Self {
        self.push_reading(
            account_id,
            Err(TransportError::Server {
                status: 400,
                message: Some(message.to_string()),
            }),
        )
    }

    pub fn push_reading(self, account_id: &str, result: Result<ReadingAccepted, TransportError>) -> Self {
        self.readings
            .borrow_mut()
            .entry(account_id.to_string())
            .or_default()
            .push_back(result);
        self
    }

    pub fn finalize(self, result: Result<RouteFinalized, TransportError>) -> Self {
        self.finalizes.borrow_mut().push_back(result);
        self
    }

    pub fn lookup(self, result: Result<AccountLookup, TransportError>) -> Self {
        self.lookups.borrow_mut().push_back(result);
        self
    }

    /// Hold the reading request for `account_id` until the sender fires
    pub fn gate(&self, account_id: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(account_id.to_string(), rx);
        tx
    }

    /// Hold the next finalize request until the sender fires
    pub fn gate_finalize(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.finalize_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }
}

#[async_trait(?Send)]
impl RouteTransport for FakeTransport {
    async fn submit_reading(&self, account_id: &str, reading_value: &str) -> Result<ReadingAccepted, TransportError> {
        self.calls
            .borrow_mut()
            .push(format!("reading:{}={}", account_id, reading_value));
        let gate = self.gates.borrow_mut().remove(account_id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.readings
            .borrow_mut()
            .get_mut(account_id)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reading".to_string())))
    }

    async fn finalize_route(&self, route_id: &str) -> Result<RouteFinalized, TransportError> {
        self.calls.borrow_mut().push(format!("finalize:{}", route_id));
        let gate = self.finalize_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.finalizes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted finalize".to_string())))
    }

    async fn lookup_account(&self, contract: &str) -> Result<AccountLookup, TransportError> {
        self.calls.borrow_mut().push(format!("lookup:{}", contract));
        self.lookups
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(AccountLookup::NotFound))
    }
}

// ========================
// View
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Items(Vec<(String, bool)>),
    Progress(Progress),
    FinalizeShown,
    ItemBusy(String, bool),
    FinalizeBusy(bool),
    Notice(Notice),
    Confirm(String),
    Navigate(String),
    Reload,
    Closed,
}

pub struct RecordingView {
    pub events: RefCell<Vec<ViewEvent>>,
    pub answer: Cell<bool>,
}

impl RecordingView {
    pub fn confirming(answer: bool) -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            answer: Cell::new(answer),
        }
    }

    pub fn count(&self, pred: impl Fn(&ViewEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Notice(n) if n.level == NoticeLevel::Error => Some(n.text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_items(&self) -> Option<Vec<(String, bool)>> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Items(items) => Some(items.clone()),
            _ => None,
        })
    }

    pub fn last_progress(&self) -> Option<Progress> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Progress(p) => Some(*p),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl RouteView for RecordingView {
    fn render_items(&self, items: &[TaskItem]) {
        let rows = items.iter().map(|i| (i.id.clone(), i.completed)).collect();
        self.events.borrow_mut().push(ViewEvent::Items(rows));
    }

    fn render_progress(&self, progress: &Progress) {
        self.events.borrow_mut().push(ViewEvent::Progress(*progress));
    }

    fn show_finalize_control(&self) {
        self.events.borrow_mut().push(ViewEvent::FinalizeShown);
    }

    fn set_item_busy(&self, item_id: &str, busy: bool) {
        self.events
            .borrow_mut()
            .push(ViewEvent::ItemBusy(item_id.to_string(), busy));
    }

    fn set_finalize_busy(&self, busy: bool) {
        self.events.borrow_mut().push(ViewEvent::FinalizeBusy(busy));
    }

    fn notify(&self, notice: Notice) {
        self.events.borrow_mut().push(ViewEvent::Notice(notice));
    }

    fn confirm(&self, question: &str) -> bool {
        self.events
            .borrow_mut()
            .push(ViewEvent::Confirm(question.to_string()));
        self.answer.get()
    }

    fn navigate(&self, url: &str) {
        self.events.borrow_mut().push(ViewEvent::Navigate(url.to_string()));
    }

    fn reload(&self) {
        self.events.borrow_mut().push(ViewEvent::Reload);
    }

    fn close_route(&self) {
        self.events.borrow_mut().push(ViewEvent::Closed);
    }
}

// ========================
// Fixtures
// ========================

pub type TestController = RouteController<FakeTransport, RecordingView>;

pub fn route(ids: &[&str]) -> Route {
    Route::new(
        "ruta-1",
        ids.iter().map(|id| TaskItem::new(*id, format!("Cuenta {}", id))).collect(),
    )
}

pub fn controller(route: Route, transport: FakeTransport) -> TestController {
    let controller = RouteController::new(route, transport, RecordingView::confirming(true));
    controller.mount();
    controller
}

pub fn finalized(message: &str, redirect: Option<&str>) -> Result<RouteFinalized, TransportError> {
    Ok(RouteFinalized {
        message: message.to_string(),
        redirect_url: redirect.map(str::to_string),
    })
}
