//! Route Controller
//!
//! Coordinates the task list, progress and transport for one route view.
//! The controller is the only writer of route state; the page talks to it
//! through `RouteView`, a port covering every visible side effect.
//!
//! Phases: `Active` -> `ReadyToFinalize` -> `Finalizing` -> `Finalized`.
//! A failed finalize goes back to `ReadyToFinalize`.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::error::{RouteError, RouteResult};
use crate::models::{Route, TaskItem};
use crate::progress::{Progress, ProgressTracker};
use crate::task_list::TaskList;
use crate::transport::RouteTransport;

pub const FINALIZE_CONFIRMATION: &str =
    "¿Estás seguro que deseas finalizar esta ruta? Esta acción eliminará la ruta inmediatamente.";
pub const READING_FALLBACK: &str = "Error al guardar la lectura";
pub const FINALIZE_FALLBACK: &str = "Error al finalizar la ruta";
pub const READING_REQUIRED: &str = "Por favor ingrese una lectura";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePhase {
    /// At least one item is still incomplete
    Active,
    /// Every item complete, finalize control visible
    ReadyToFinalize,
    /// Finalize request in flight
    Finalizing,
    /// Terminal
    Finalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// What a confirmed (or declined) finalize ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizeOutcome {
    Declined,
    Redirected(String),
    Reloaded,
}

/// Visible side effects of the route page
pub trait RouteView {
    /// Redraw the rows in this order; completed rows show the confirmation
    /// marker instead of the reading form
    fn render_items(&self, items: &[TaskItem]);

    fn render_progress(&self, progress: &Progress);

    /// Materialize the finalize control. Called at most once per route.
    fn show_finalize_control(&self);

    /// Toggle the "submitting" state of one row's reading form
    fn set_item_busy(&self, item_id: &str, busy: bool);

    /// Disable the finalize control while a request is in flight
    fn set_finalize_busy(&self, busy: bool);

    fn notify(&self, notice: Notice);

    /// Blocking yes/no question
    fn confirm(&self, question: &str) -> bool;

    fn navigate(&self, url: &str);

    fn reload(&self);

    /// Tear down the route view after finalization
    fn close_route(&self);
}

struct RouteState {
    route_id: String,
    list: TaskList,
    phase: RoutePhase,
    finalize_control_shown: bool,
    /// Items with a reading request in flight
    submitting: HashSet<String>,
}

pub struct RouteController<T, V> {
    transport: T,
    view: V,
    state: RefCell<RouteState>,
}

impl<T: RouteTransport, V: RouteView> RouteController<T, V> {
    pub fn new(route: Route, transport: T, view: V) -> Self {
        let phase = if ProgressTracker::should_reveal_finalize(&route.items) {
            RoutePhase::ReadyToFinalize
        } else {
            RoutePhase::Active
        };
        let state = RouteState {
            route_id: route.id,
            list: TaskList::new(route.items),
            phase,
            finalize_control_shown: false,
            submitting: HashSet::new(),
        };
        Self {
            transport,
            view,
            state: RefCell::new(state),
        }
    }

    /// Render the initial rows and progress. A route whose items are all
    /// complete already shows its finalize control.
    pub fn mount(&self) {
        let (items, progress) = {
            let state = self.state.borrow();
            (state.list.items().to_vec(), ProgressTracker::recompute(state.list.items()))
        };
        self.view.render_items(&items);
        self.view.render_progress(&progress);
        self.reveal_finalize_once();
    }

    // ========================
    // Accessors
    // ========================

    pub fn phase(&self) -> RoutePhase {
        self.state.borrow().phase
    }

    pub fn route_id(&self) -> String {
        self.state.borrow().route_id.clone()
    }

    pub fn items(&self) -> Vec<TaskItem> {
        self.state.borrow().list.items().to_vec()
    }

    pub fn progress(&self) -> Progress {
        ProgressTracker::recompute(self.state.borrow().list.items())
    }

    pub fn finalize_control_shown(&self) -> bool {
        self.state.borrow().finalize_control_shown
    }

    /// Ids in visiting order, ready to be submitted with the edit form
    pub fn current_order(&self) -> Vec<String> {
        self.state
            .borrow()
            .list
            .current_order()
            .map(str::to_string)
            .collect()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    // ========================
    // Reordering
    // ========================

    pub fn begin_drag(&self, item_id: &str) -> bool {
        let mut state = self.state.borrow_mut();
        if state.phase == RoutePhase::Finalized {
            return false;
        }
        let accepted = state.list.begin_drag(item_id);
        if accepted {
            log::debug!("[ROUTE] drag start: {}", item_id);
        }
        accepted
    }

    /// Forward a pointer sample; redraws the rows when the order changed
    pub fn drag_over(&self, target_id: &str, offset_y: f64, height: f64) -> bool {
        let moved = {
            let mut state = self.state.borrow_mut();
            if !state.list.drag_over(target_id, offset_y, height) {
                return false;
            }
            state.list.items().to_vec()
        };
        self.view.render_items(&moved);
        true
    }

    /// Finish the gesture and return the now-authoritative order
    pub fn end_drag(&self) -> Vec<String> {
        let dragged = self.state.borrow_mut().list.end_drag();
        let order = self.current_order();
        if let Some(id) = dragged {
            log::debug!("[ROUTE] drag end: {} -> {:?}", id, order);
        }
        order
    }

    // ========================
    // Readings
    // ========================

    /// Submit a reading for `item_id` (the account id). On success the item
    /// is marked completed and progress is re-rendered; on failure the error
    /// is shown and the item stays submittable. An item that is already
    /// completed is left alone, whatever the value.
    pub async fn on_reading_submitted(&self, item_id: &str, value: &str) -> RouteResult<()> {
        let rejected = {
            let mut state = self.state.borrow_mut();
            let completed = state.list.get(item_id).map(|item| item.completed);
            if matches!(state.phase, RoutePhase::Finalizing | RoutePhase::Finalized) {
                Some(RouteError::State(format!("reading for {} while {:?}", item_id, state.phase)))
            } else if completed.is_none() {
                Some(RouteError::State(format!("unknown item {}", item_id)))
            } else if completed == Some(true) {
                log::debug!("[ROUTE] item {} already completed", item_id);
                return Ok(());
            } else if value.trim().is_empty() {
                Some(RouteError::Validation(READING_REQUIRED.to_string()))
            } else if !state.submitting.insert(item_id.to_string()) {
                Some(RouteError::State(format!("reading for {} already in flight", item_id)))
            } else {
                None
            }
        };
        if let Some(err) = rejected {
            return Err(self.surface(err, READING_FALLBACK));
        }

        self.view.set_item_busy(item_id, true);
        let result = self.transport.submit_reading(item_id, value).await;
        self.state.borrow_mut().submitting.remove(item_id);
        self.view.set_item_busy(item_id, false);

        match result {
            Ok(_) => {
                self.complete_item(item_id);
                Ok(())
            }
            Err(e) => {
                log::warn!("[ROUTE] reading for {} failed: {}", item_id, e);
                Err(self.surface(e.into(), READING_FALLBACK))
            }
        }
    }

    fn complete_item(&self, item_id: &str) {
        let (items, progress) = {
            let mut state = self.state.borrow_mut();
            if !state.list.mark_completed(item_id) {
                return;
            }
            let progress = ProgressTracker::recompute(state.list.items());
            if progress.is_complete() && state.phase == RoutePhase::Active {
                state.phase = RoutePhase::ReadyToFinalize;
            }
            (state.list.items().to_vec(), progress)
        };
        log::debug!("[ROUTE] item {} completed ({})", item_id, progress.label());
        self.view.render_items(&items);
        self.view.render_progress(&progress);
        self.reveal_finalize_once();
    }

    fn reveal_finalize_once(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.finalize_control_shown || state.phase != RoutePhase::ReadyToFinalize {
                return;
            }
            state.finalize_control_shown = true;
        }
        self.view.show_finalize_control();
    }

    // ========================
    // Finalize
    // ========================

    /// Ask for confirmation, then close the route on the server. Exactly one
    /// of navigate/reload happens on success.
    pub async fn on_finalize_requested(&self) -> RouteResult<FinalizeOutcome> {
        let phase = self.phase();
        if phase != RoutePhase::ReadyToFinalize {
            return Err(self.surface(RouteError::State(format!("finalize while {:?}", phase)), FINALIZE_FALLBACK));
        }
        if !self.view.confirm(FINALIZE_CONFIRMATION) {
            log::debug!("[ROUTE] finalize declined");
            return Ok(FinalizeOutcome::Declined);
        }

        let route_id = {
            let mut state = self.state.borrow_mut();
            state.phase = RoutePhase::Finalizing;
            state.route_id.clone()
        };
        self.view.set_finalize_busy(true);

        match self.transport.finalize_route(&route_id).await {
            Ok(done) => {
                self.state.borrow_mut().phase = RoutePhase::Finalized;
                log::debug!("[ROUTE] route {} finalized", route_id);
                self.view.notify(Notice::success(done.message.clone()));
                self.view.close_route();
                match done.redirect() {
                    Some(url) => {
                        self.view.navigate(url);
                        Ok(FinalizeOutcome::Redirected(url.to_string()))
                    }
                    None => {
                        self.view.reload();
                        Ok(FinalizeOutcome::Reloaded)
                    }
                }
            }
            Err(e) => {
                self.state.borrow_mut().phase = RoutePhase::ReadyToFinalize;
                self.view.set_finalize_busy(false);
                log::warn!("[ROUTE] finalize of {} failed: {}", route_id, e);
                Err(self.surface(e.into(), FINALIZE_FALLBACK))
            }
        }
    }

    /// Show `err` to the user unless it is a rejected transition, which is
    /// only logged. Returns the error for the caller.
    fn surface(&self, err: RouteError, fallback: &str) -> RouteError {
        if err.is_state() {
            log::debug!("[ROUTE] {}", err);
        } else {
            self.view.notify(Notice::error(err.user_message(fallback)));
        }
        err
    }
}
