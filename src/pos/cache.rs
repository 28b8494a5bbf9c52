// WHY: Bounded memo of part-of-speech results keyed by cleaned word
// Eviction drops the oldest insertions in a batch instead of tracking recency

use std::collections::{HashMap, VecDeque};
use tracing::debug;

use super::PartOfSpeech;

/// Entry count above which eviction runs
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Number of oldest entries dropped per eviction
pub const EVICTION_BATCH: usize = 100;

/// FIFO-capped cache of classification results
#[derive(Debug, Clone)]
pub struct PosCache {
    entries: HashMap<String, PartOfSpeech>,
    /// Keys in first-insertion order
    order: VecDeque<String>,
    capacity: usize,
    batch: usize,
}

impl PosCache {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_CAPACITY, EVICTION_BATCH)
    }

    pub fn with_limits(capacity: usize, batch: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
            batch,
        }
    }

    pub fn get(&self, word: &str) -> Option<PartOfSpeech> {
        self.entries.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Store a result; overwriting keeps the key's first insertion slot
    pub fn insert(&mut self, word: &str, pos: PartOfSpeech) {
        if let Some(existing) = self.entries.get_mut(word) {
            *existing = pos;
            return;
        }

        self.entries.insert(word.to_string(), pos);
        self.order.push_back(word.to_string());

        if self.entries.len() > self.capacity {
            self.evict_oldest();
        }
    }

    fn evict_oldest(&mut self) {
        let count = self.batch.min(self.order.len());
        for key in self.order.drain(..count) {
            self.entries.remove(&key);
        }
        debug!(evicted = count, remaining = self.entries.len(), "Evicted oldest part-of-speech cache entries");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl Default for PosCache {
    fn default() -> Self {
        Self::new()
    }
}
