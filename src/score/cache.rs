//! Per-step score memo.
//!
//! The move log is immutable once loaded, so scores at a given step never
//! change. Whoever replaces the map or the log must `clear` the cache.

use std::collections::HashMap;

use super::scorer::Scores;

#[derive(Debug, Default)]
pub struct ScoreCache {
    entries: HashMap<usize, Scores>,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached scores for `step`, computing them on a miss.
    pub fn get_or_compute<F>(&mut self, step: usize, compute: F) -> &Scores
    where
        F: FnOnce() -> Scores,
    {
        self.entries.entry(step).or_insert_with(compute)
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
}
