//! Task List
//!
//! Ordered sequence of route items with index-based reordering.
//! A drag gesture is a `begin_drag` / `drag_over`* / `end_drag` sequence;
//! each `drag_over` sample may move the dragged item next to the hovered one.

use crate::models::TaskItem;

/// Where the dragged item lands relative to the hovered item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSide {
    Before,
    After,
}

impl DropSide {
    /// Midpoint rule: upper half of the target inserts before it,
    /// lower half (midpoint included) inserts after it.
    pub fn from_pointer(offset_y: f64, height: f64) -> Self {
        if offset_y < height / 2.0 {
            DropSide::Before
        } else {
            DropSide::After
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    items: Vec<TaskItem>,
    /// Id of the item being relocated, if a drag is in progress
    dragging: Option<String>,
}

impl TaskList {
    pub fn new(items: Vec<TaskItem>) -> Self {
        Self { items, dragging: None }
    }

    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&TaskItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Start relocating `id`. Rejected when another drag is active or the id
    /// is unknown.
    pub fn begin_drag(&mut self, id: &str) -> bool {
        if self.dragging.is_some() || self.index_of(id).is_none() {
            return false;
        }
        self.dragging = Some(id.to_string());
        true
    }

    /// Apply one pointer sample over `target_id`. Returns whether the order
    /// changed. Samples without an active drag, over the dragged item itself,
    /// or over an unknown id are ignored.
    pub fn drag_over(&mut self, target_id: &str, offset_y: f64, height: f64) -> bool {
        let Some(dragged) = self.dragging.as_deref() else {
            return false;
        };
        if dragged == target_id {
            return false;
        }
        let (Some(from), Some(target)) = (self.index_of(dragged), self.index_of(target_id)) else {
            return false;
        };

        let item = self.items.remove(from);
        // removing the dragged item shifts everything after it one slot left
        let target = if from < target { target - 1 } else { target };
        let to = match DropSide::from_pointer(offset_y, height) {
            DropSide::Before => target,
            DropSide::After => target + 1,
        };
        self.items.insert(to, item);
        to != from
    }

    /// Clear the drag marker; the current order is now authoritative.
    /// Returns the id that was being dragged.
    pub fn end_drag(&mut self) -> Option<String> {
        self.dragging.take()
    }

    /// Item ids in display order, computed fresh from the sequence
    pub fn current_order(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.items.iter().map(|item| item.id.as_str())
    }

    /// Mark `id` completed. Returns true only on the first transition.
    pub fn mark_completed(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if !item.completed => {
                item.completed = true;
                true
            }
            _ => false,
        }
    }
}
