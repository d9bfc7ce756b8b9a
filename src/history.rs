//! Command history with up/down recall
//!
//! Entries are raw command lines, newest first. They are only ever handed
//! back for editing; nothing re-parses them.

use std::collections::VecDeque;

/// Default number of commands kept per session
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Bounded, most-recent-first list of entered commands
///
/// The recall cursor is `None` while the user edits a fresh line and
/// `Some(i)` while entry `i` (0 = newest) is loaded into the input.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    capacity: usize,
    cursor: Option<usize>,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            cursor: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry `index` positions back, 0 being the most recent
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Entries newest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Record `line` as the most recent command
    ///
    /// Blank lines are ignored. The oldest entry is dropped once capacity is
    /// exceeded, and recall restarts from the live line.
    pub fn record(
        &mut self,
        line: &str,
    ) {
        self.cursor = None;

        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.entries.push_front(line.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Step to an older entry (arrow up)
    ///
    /// Returns the entry to load, or `None` when already at the oldest one.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let next_index = match self.cursor {
            None => 0,
            Some(i) => i + 1,
        };
        if next_index >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next_index);
        self.get(next_index)
    }

    /// Step to a newer entry (arrow down)
    ///
    /// Stepping past the newest entry returns `Some("")` to blank the input;
    /// returns `None` when already on the live line.
    pub fn recall_next(&mut self) -> Option<&str> {
        match self.cursor {
            None => None,
            Some(0) => {
                self.cursor = None;
                Some("")
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                self.get(i - 1)
            }
        }
    }

    /// Forget the recall position without touching entries
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
