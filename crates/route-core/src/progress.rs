//! Progress Tracking
//!
//! Aggregate completion derived from the item sequence. Everything here is
//! recomputed from a full snapshot of the items, never updated incrementally.

use crate::models::TaskItem;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// 0..=100; 0 for an empty route
    pub percentage: f64,
}

impl Progress {
    /// True iff there is at least one item and all of them are completed
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    pub fn label(&self) -> String {
        format!("Progreso: {} de {} lecturas", self.completed, self.total)
    }

    /// CSS width for the progress bar
    pub fn bar_width(&self) -> String {
        format!("{:.2}%", self.percentage)
    }
}

/// Pure functions over a snapshot of the items
pub struct ProgressTracker;

impl ProgressTracker {
    pub fn recompute(items: &[TaskItem]) -> Progress {
        let total = items.len();
        let completed = items.iter().filter(|item| item.completed).count();
        let percentage = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        Progress { completed, total, percentage }
    }

    pub fn should_reveal_finalize(items: &[TaskItem]) -> bool {
        Self::recompute(items).is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(flags: &[bool]) -> Vec<TaskItem> {
        flags
            .iter()
            .enumerate()
            .map(|(i, done)| TaskItem {
                id: i.to_string(),
                label: String::new(),
                completed: *done,
            })
            .collect()
    }

    #[test]
    fn test_recompute_counts() {
        let progress = ProgressTracker::recompute(&items(&[true, false, false, true]));
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percentage, 50.0);
        assert_eq!(progress.bar_width(), "50.00%");
        assert_eq!(progress.label(), "Progreso: 2 de 4 lecturas");
    }

    #[test]
    fn test_recompute_empty_route() {
        let progress = ProgressTracker::recompute(&[]);
        assert_eq!(progress, Progress { completed: 0, total: 0, percentage: 0.0 });
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let list = items(&[true, false, true]);
        let first = ProgressTracker::recompute(&list);
        let second = ProgressTracker::recompute(&list);
        assert_eq!(first, second);
        assert_eq!(first.bar_width(), "66.67%");
    }

    #[test]
    fn test_should_reveal_finalize() {
        assert!(!ProgressTracker::should_reveal_finalize(&[]));
        assert!(!ProgressTracker::should_reveal_finalize(&items(&[false])));
        assert!(!ProgressTracker::should_reveal_finalize(&items(&[true, false])));
        assert!(ProgressTracker::should_reveal_finalize(&items(&[true])));
        assert!(ProgressTracker::should_reveal_finalize(&items(&[true, true, true])));
    }
}
