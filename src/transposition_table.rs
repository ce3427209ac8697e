use std::collections::HashMap;

/// Memo table for one top-level search decision.
///
/// Maps a packed position key and the maximizing/minimizing flag to the
/// best column and score already computed for that node. Entries are keyed
/// by position and side only, not by remaining depth, and the whole table
/// is cleared at the start of every top-level decision.
#[derive(Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<(u128, bool), (usize, i64)>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, key: u128, maximizing: bool) -> Option<(usize, i64)> {
        self.entries.get(&(key, maximizing)).copied()
    }

    pub fn set(&mut self, key: u128, maximizing: bool, column: usize, score: i64) {
        self.entries.insert((key, maximizing), (column, score));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
