//! Classifier trait and common types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tasktriage_core::{Complexity, Priority, Result};

/// Trait for all classifiers
///
/// Implementations are synchronous and hold no per-call state, so a single
/// instance can be shared across threads behind an `Arc`.
pub trait Classifier: Send + Sync {
    /// Classify the given text
    ///
    /// Returns a precondition error for empty or whitespace-only text.
    fn classify(&self, text: &str) -> Result<ClassificationResult>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Category ids this classifier can return, in declaration order
    fn categories(&self) -> Vec<&str>;

    /// Display details for each category, in declaration order
    fn category_info(&self) -> Vec<CategoryInfo> {
        self.categories()
            .into_iter()
            .map(|id| CategoryInfo {
                id: id.to_string(),
                label: id.to_string(),
                base_weight: 1.0,
            })
            .collect()
    }
}

/// Descriptive view of one category, for listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub label: String,
    /// Display weight from the rule table; not part of the score
    pub base_weight: f32,
}

/// Result of classification
///
/// Produced once per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Top-ranked category id
    pub primary_category: String,

    /// Display label of the primary category
    pub primary_label: String,

    /// Primary raw score clamped to 0.0-1.0
    pub confidence: f32,

    /// Runner-up category ids (ranks 2 and 3)
    pub secondary_categories: Vec<String>,

    /// Keywords that hit in any category, deduplicated
    pub matched_terms: Vec<String>,

    /// Which signals fired for the primary category
    pub reasoning: Vec<String>,

    /// Canned suggestions for the primary category
    pub suggestions: Vec<String>,

    pub complexity: Complexity,

    pub priority: Priority,

    pub estimated_time: String,

    /// Raw score of every category, highest first
    pub scores: Vec<CategoryScore>,

    /// When the classification was made
    pub created_at: DateTime<Utc>,
}

impl ClassificationResult {
    /// Check if confidence meets a threshold
    pub fn exceeds_threshold(&self, threshold: f32) -> bool {
        self.confidence >= threshold
    }

    /// Reasoning joined into one sentence for display
    pub fn reasoning_summary(&self) -> String {
        self.reasoning.join(", ")
    }

    /// Whether two results agree on everything except their timestamp
    pub fn same_outcome(&self, other: &Self) -> bool {
        Self {
            created_at: other.created_at,
            ..self.clone()
        } == *other
    }
}

/// Raw (unclamped) score of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: f32,
}
