use std::collections::VecDeque;

/// Default number of snapshots kept on the undo stack
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Fixed-capacity stack that silently evicts its oldest entry on overflow
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push onto the top, returning the evicted bottom entry if the stack was full
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(value);
        evicted
    }

    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    pub fn top(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate from oldest (bottom) to most recent (top)
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

/// Undo/redo stacks of full content snapshots
///
/// Snapshots are owned `String`s, so nothing done to the live buffer can
/// change a stored entry.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    undo_stack: BoundedStack<String>,
    redo_stack: BoundedStack<String>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: BoundedStack::with_capacity(capacity),
            redo_stack: BoundedStack::with_capacity(capacity),
        }
    }

    /// Record the content produced by a new edit, clearing the redo stack
    pub fn record(&mut self, snapshot: String) {
        self.redo_stack.clear();
        if let Some(dropped) = self.undo_stack.push(snapshot) {
            log::trace!("undo history full, dropped snapshot {:?}", dropped);
        }
    }

    /// Move the top undo snapshot to the redo stack
    ///
    /// Returns the content that should become current: the new undo top,
    /// or an empty string when the undo stack ran dry. `None` if there was
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<String> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(snapshot);
        Some(self.undo_stack.top().cloned().unwrap_or_default())
    }

    /// Move the top redo snapshot back onto the undo stack and return it
    pub fn redo(&mut self) -> Option<String> {
        let snapshot = self.redo_stack.pop()?;
        if let Some(dropped) = self.undo_stack.push(snapshot.clone()) {
            log::trace!("undo history full, dropped snapshot {:?}", dropped);
        }
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.undo_stack.capacity()
    }

    /// Undo snapshots from oldest to most recent
    pub fn undo_snapshots(&self) -> impl Iterator<Item = &str> {
        self.undo_stack.iter().map(String::as_str)
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new()
    }
}
