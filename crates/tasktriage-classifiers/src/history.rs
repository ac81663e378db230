//! Bounded classification history
//!
//! The classifier itself keeps no state. Callers that want a recent-results
//! list own one of these and record into it after each call.

use crate::classifier::ClassificationResult;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

/// Default number of results retained
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Most-recent-first list of results with a fixed capacity
#[derive(Debug, Clone)]
pub struct ClassificationHistory {
    entries: VecDeque<ClassificationResult>,
    capacity: usize,
}

impl ClassificationHistory {
    /// Create a history; a capacity of zero is raised to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a result at the front, evicting the oldest beyond capacity
    pub fn record(&mut self, result: ClassificationResult) {
        self.entries.push_front(result);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Most recent result
    pub fn latest(&self) -> Option<&ClassificationResult> {
        self.entries.front()
    }

    /// Results, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.entries.iter()
    }

    /// How often each primary category appears, most frequent first
    ///
    /// Ties are ordered by the category's most recent appearance.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for entry in &self.entries {
            match counts.iter_mut().find(|(c, _)| *c == entry.primary_category) {
                Some((_, n)) => *n += 1,
                None => counts.push((entry.primary_category.clone(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
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

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ClassificationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

/// History shared between callers; appends are serialized by the lock
#[derive(Debug, Clone, Default)]
pub struct SharedHistory {
    inner: Arc<RwLock<ClassificationHistory>>,
}

impl SharedHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ClassificationHistory::new(capacity))),
        }
    }

    /// Add a result at the front
    pub fn record(&self, result: ClassificationResult) {
        self.inner.write().record(result);
    }

    /// Most recent results, at most `limit`
    pub fn recent(&self, limit: usize) -> Vec<ClassificationResult> {
        self.inner.read().iter().take(limit).cloned().collect()
    }

    /// Copy of the current history
    pub fn snapshot(&self) -> ClassificationHistory {
        self.inner.read().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
