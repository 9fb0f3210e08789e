//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for reorderable lists.
//! Uses movement threshold to distinguish click from drag, and reports
//! pointer samples relative to the hovered row so the list owner can
//! decide where the dragged row goes.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl DndSignals {
    pub fn is_dragging(&self, item_id: &str) -> bool {
        self.dragging_id_read.with(|d| d.as_deref() == Some(item_id))
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable rows.
/// Records pending drag with start position; presses on form controls are
/// left alone so inputs and buttons inside a row keep working.
pub fn make_on_mousedown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        dnd.pending_id_write.set(Some(item_id.clone()));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mousemove handler for a row.
/// While a drag is active, calls `on_over(row_id, offset_y, height)` with the
/// pointer's vertical offset inside the row.
pub fn make_on_item_mousemove<F>(dnd: DndSignals, item_id: String, on_over: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(&str, f64, f64) + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(|d| d.is_none()) {
            return;
        }
        let Some(row) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = row.get_bounding_client_rect();
        let offset_y = ev.client_y() as f64 - rect.top();
        on_over(&item_id, offset_y, rect.height());
    }
}

/// Id to start dragging once the pointer at `(x, y)` moved past the
/// threshold. None while idle, while a drag is active, or once the signals
/// were disposed along with the list that owned them.
fn drag_start_candidate(dnd: &DndSignals, x: i32, y: i32) -> Option<String> {
    let pending = dnd.pending_id_read.try_get_untracked().flatten()?;
    if dnd.dragging_id_read.try_with_untracked(|d| d.is_some()).unwrap_or(true) {
        return None;
    }
    let dx = (x - dnd.start_x_read.try_get_untracked()?).abs();
    let dy = (y - dnd.start_y_read.try_get_untracked()?).abs();
    (dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX).then_some(pending)
}

/// Clear the gesture and return what was being dragged.
/// None when the signals are already disposed.
fn finish_gesture(dnd: &DndSignals) -> Option<Option<String>> {
    let dragged = dnd.dragging_id_read.try_get_untracked()?;
    end_drag(dnd);
    Some(dragged)
}

/// Bind document-level handlers: mousemove starts the drag once the pointer
/// moved past the threshold (`on_start(id)`), mouseup ends it
/// (`on_end(Some(id))` after a real drag, `on_end(None)` after a click).
pub fn bind_global_drag_handlers<S, E>(dnd: DndSignals, on_start: S, on_end: E)
where
    S: Fn(String) + 'static,
    E: Fn(Option<String>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    // The listeners outlive the list; every read tolerates disposed signals
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if let Some(pending) = drag_start_candidate(&dnd, ev.client_x(), ev.client_y()) {
            dnd.dragging_id_write.set(Some(pending.clone()));
            on_start(pending);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        // Click without movement: the row's own click handler fires naturally
        if let Some(dragged) = finish_gesture(&dnd) {
            on_end(dragged);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
}
