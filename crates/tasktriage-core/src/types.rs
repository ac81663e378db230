//! Core types for tasktriage

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much work a request looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        }
    }

    /// Display bucket for the time a task of this complexity usually takes
    pub fn estimated_time(&self) -> &'static str {
        match self {
            Self::Simple => "15-30 minutes",
            Self::Medium => "1-2 hours",
            Self::Complex => "2-4 hours",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Urgency inferred from the wording of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimated_time_buckets() {
        assert_eq!(Complexity::Simple.estimated_time(), "15-30 minutes");
        assert_eq!(Complexity::Medium.estimated_time(), "1-2 hours");
        assert_eq!(Complexity::Complex.estimated_time(), "2-4 hours");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Complexity::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");

        let priority: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(priority, Priority::Low);
    }
}
