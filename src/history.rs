// Analysis history: the most recent results, newest first.
//
// In-memory only. The store is the one place an AnalysisResult gets an id.

use std::collections::VecDeque;

use crate::models::AnalysisResult;

/// How many analyses are kept when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded, newest-first list of recent analyses.
#[derive(Debug, Clone)]
pub struct AnalysisHistory {
    entries: VecDeque<AnalysisResult>,
    capacity: usize,
    next_id: u64,
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl AnalysisHistory {
    /// Create an empty history. A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Assign an id, store the result at the front, and evict the oldest
    /// entry if the history is full.
    pub fn record(&mut self, mut result: AnalysisResult) -> &AnalysisResult {
        result.id = Some(format!("analysis-{}", self.next_id));
        self.next_id += 1;

        self.entries.push_front(result);
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    /// Look up a stored result by id.
    pub fn get(&self, id: &str) -> Option<&AnalysisResult> {
        self.entries.iter().find(|r| r.id.as_deref() == Some(id))
    }

    /// The most recently recorded result.
    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.entries.front()
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.entries.iter()
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
}
