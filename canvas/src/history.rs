//! Linear undo/redo log of full state snapshots.
//!
//! The log always holds at least one entry. Pushing a new snapshot discards
//! every entry after the cursor, so a branch abandoned by undo-then-edit can
//! never be redone.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    index: usize,
}

impl<T: Clone> History<T> {
    /// Start a log whose only entry is `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self { entries: vec![initial], index: 0 }
    }

    /// Drop all entries and restart from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.entries.clear();
        self.entries.push(initial);
        self.index = 0;
    }

    /// Truncate after the cursor, append `snapshot`, and advance to it.
    pub fn push(&mut self, snapshot: T) {
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry, returning the snapshot now under the cursor.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Step forward one entry, returning the snapshot now under the cursor.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    /// Snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.index)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of entries in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a log holds at least its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the cursor.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}
