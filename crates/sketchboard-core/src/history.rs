//! Linear undo/redo history of snapshots.

/// An index-addressable timeline of snapshots.
///
/// The entry at [`History::index`] is the current state. Committing drops
/// everything after the current entry and appends; overwriting replaces the
/// current entry in place so continuous drags do not flood the timeline.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    index: usize,
    /// Maximum number of entries to keep (`None` = unbounded).
    limit: Option<usize>,
}

impl<T: Clone> History<T> {
    /// Create a history holding only `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            limit: None,
        }
    }

    /// Create a history that keeps at most `limit` entries, dropping the
    /// oldest on commit. A limit below two is treated as two.
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            limit: Some(limit.max(2)),
            ..Self::new(initial)
        }
    }

    /// The current snapshot.
    pub fn current(&self) -> &T {
        &self.entries[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Append `value` after the current entry, discarding any redo entries,
    /// then drop the oldest entries over the limit.
    pub fn commit(&mut self, value: T) {
        self.append(value);
        self.trim_to_limit();
    }

    /// Append `value` after the current entry, discarding any redo entries.
    ///
    /// Unlike [`History::commit`] the limit is not applied, so a following
    /// [`History::discard_current`] leaves the timeline exactly as it was.
    /// Call [`History::trim_to_limit`] once the entry is final.
    pub fn append(&mut self, value: T) {
        self.entries.truncate(self.index + 1);
        self.entries.push(value);
        self.index += 1;
        log::debug!("history append: index {} of {}", self.index, self.entries.len());
    }

    /// Append the result of applying `update` to the current entry.
    pub fn append_with(&mut self, update: impl FnOnce(&T) -> T) {
        let value = update(self.current());
        self.append(value);
    }

    /// Drop the oldest entries until the timeline fits the limit.
    pub fn trim_to_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.entries.len() > limit {
            let excess = self.entries.len() - limit;
            self.entries.drain(..excess);
            self.index -= excess;
            log::debug!("history trimmed {excess} oldest entries");
        }
    }

    /// Commit the result of applying `update` to the current entry.
    pub fn commit_with(&mut self, update: impl FnOnce(&T) -> T) {
        let value = update(self.current());
        self.commit(value);
    }

    /// Replace the current entry without growing the timeline.
    pub fn overwrite(&mut self, value: T) {
        self.entries[self.index] = value;
    }

    /// Overwrite the current entry with the result of applying `update` to it.
    pub fn overwrite_with(&mut self, update: impl FnOnce(&T) -> T) {
        let value = update(self.current());
        self.overwrite(value);
    }

    /// Step back one entry. Returns false at the first entry.
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.index -= 1;
            log::debug!("history undo: index {}", self.index);
            true
        } else {
            false
        }
    }

    /// Step forward one entry. Returns false at the last entry.
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.index += 1;
            log::debug!("history redo: index {}", self.index);
            true
        } else {
            false
        }
    }

    /// Drop the current entry and everything after it, stepping back one.
    ///
    /// Reverts the most recent commit when nothing has been undone since.
    /// Returns false at the first entry, which is never dropped.
    pub fn discard_current(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.entries.truncate(self.index);
        self.index -= 1;
        log::debug!("history discard: index {} of {}", self.index, self.entries.len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_history() {
        let mut history = History::new(Vec::<u32>::new());
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.undo());
        assert_eq!(history.index(), 0);
        assert!(!history.redo());
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn test_commit_undo_redo_round_trip() {
        let mut history = History::new(vec![]);
        history.commit(vec![1]);
        assert_eq!(history.current(), &vec![1]);

        assert!(history.undo());
        assert!(history.current().is_empty());
        assert!(history.redo());
        assert_eq!(history.current(), &vec![1]);
        assert!(!history.redo());
    }

    #[test]
    fn test_overwrite_does_not_grow() {
        let mut history = History::new(0);
        history.commit(1);
        for n in 2..10 {
            history.overwrite(n);
        }
        assert_eq!(history.len(), 2);
        assert_eq!(*history.current(), 9);

        history.commit_with(|n| n + 1);
        assert_eq!(history.len(), 3);
        assert_eq!(history.entries(), &[0, 9, 10]);
    }

    fn appended(items: &[&'static str], item: &'static str) -> Vec<&'static str> {
        let mut items = items.to_vec();
        items.push(item);
        items
    }

    #[test]
    fn test_commit_after_undo_truncates() {
        let mut history = History::new(Vec::<&str>::new());
        history.commit_with(|s| appended(s, "A"));
        history.commit_with(|s| appended(s, "B"));
        history.undo();
        history.commit_with(|s| appended(s, "C"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[1], vec!["A"]);
        assert_eq!(history.entries()[2], vec!["A", "C"]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_overwrite_with_updates_current_only() {
        let mut history = History::new(1);
        history.commit(2);
        history.undo();
        history.overwrite_with(|n| n * 10);
        assert_eq!(history.entries(), &[10, 2]);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::with_limit(0, 3);
        for n in 1..=5 {
            history.commit(n);
        }
        assert_eq!(history.entries(), &[3, 4, 5]);
        assert_eq!(history.index(), 2);
        assert!(history.undo());
        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(*history.current(), 3);
    }

    #[test]
    fn test_append_defers_limit() {
        let mut history = History::with_limit(0, 2);
        history.commit(1);
        history.append(2);
        assert_eq!(history.entries(), &[0, 1, 2]);

        assert!(history.discard_current());
        assert_eq!(history.entries(), &[0, 1]);
        assert_eq!(history.index(), 1);

        history.append_with(|n| n + 5);
        history.trim_to_limit();
        assert_eq!(history.entries(), &[1, 6]);
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_discard_current() {
        let mut history = History::new(0);
        assert!(!history.discard_current());

        history.commit(1);
        history.commit(2);
        history.undo();
        assert!(history.discard_current());
        assert_eq!(history.entries(), &[0]);
        assert_eq!(history.index(), 0);
    }
}
