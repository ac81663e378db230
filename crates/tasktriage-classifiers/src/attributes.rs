//! Complexity, priority and time estimate
//!
//! These checks run over the lowercased request text and never look at the
//! category scores. Within each attribute the first matching rule wins.

use tasktriage_core::{Complexity, Priority};

const COMPLEX_TERMS: &[&str] = &["complex", "complete", "system"];
const MEDIUM_TERMS: &[&str] = &["optimize", "refactor", "performance"];

const HIGH_PRIORITY_TERMS: &[&str] = &["urgent", "critical", "blocking"];
const LOW_PRIORITY_TERMS: &[&str] = &["optional", "nice to have"];

/// Attributes inferred from the wording of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub complexity: Complexity,
    pub priority: Priority,
    pub estimated_time: &'static str,
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

pub fn derive_complexity(normalized: &str) -> Complexity {
    if contains_any(normalized, COMPLEX_TERMS) {
        Complexity::Complex
    } else if contains_any(normalized, MEDIUM_TERMS) {
        Complexity::Medium
    } else {
        Complexity::Simple
    }
}

pub fn derive_priority(normalized: &str) -> Priority {
    if contains_any(normalized, HIGH_PRIORITY_TERMS) {
        Priority::High
    } else if contains_any(normalized, LOW_PRIORITY_TERMS) {
        Priority::Low
    } else {
        Priority::Medium
    }
}

/// Derive every attribute from lowercased text
pub fn derive_attributes(normalized: &str) -> Attributes {
    let complexity = derive_complexity(normalized);
    Attributes {
        complexity,
        priority: derive_priority(normalized),
        estimated_time: complexity.estimated_time(),
    }
}
